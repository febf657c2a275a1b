use subject_qa_core::{
    not_found_message, AgentRegistry, AnswerKind, KnowledgeBase, SubjectAgent, KNOWN_SUBJECTS,
    PASSAGE_DISCLAIMER, PASSAGE_LEAD_IN, PASSAGE_SEPARATOR,
};

fn variants(question: &str) -> Vec<String> {
    vec![
        question.to_string(),
        question.to_uppercase(),
        format!("   {}\t", question),
        format!("\n{}  ", question.to_uppercase()),
    ]
}

#[test]
fn every_stored_question_round_trips_in_any_casing() {
    for subject in KNOWN_SUBJECTS {
        let agent = SubjectAgent::new(subject);
        let kb = agent.knowledge();
        assert!(kb.question_count() > 0, "{} should have Q&A pairs", subject);
        for question in kb.known_questions() {
            let expected = kb.exact_answer(question).unwrap().to_string();
            for asked in variants(question) {
                assert_eq!(agent.answer(&asked), expected, "{} / {:?}", subject, asked);
            }
        }
    }
}

#[test]
fn unrelated_question_is_not_found_for_every_subject() {
    for subject in KNOWN_SUBJECTS {
        let agent = SubjectAgent::new(subject);
        let answer = agent.resolve("xyzzy plugh frobnicate");
        assert_eq!(answer.kind, AnswerKind::NotFound);
        assert!(answer.text.contains(subject));
    }
}

#[test]
fn blank_question_composes_first_two_paragraphs() {
    for subject in KNOWN_SUBJECTS {
        let agent = SubjectAgent::new(subject);
        let paragraphs = agent.knowledge().paragraphs();
        let expected = format!(
            "{}{}{}{}{}",
            PASSAGE_LEAD_IN,
            paragraphs[0].text(),
            PASSAGE_SEPARATOR,
            paragraphs[1].text(),
            PASSAGE_DISCLAIMER
        );
        assert_eq!(agent.answer(""), expected);
        assert_eq!(agent.answer("   \t "), expected);
    }
}

#[test]
fn three_shared_matches_show_only_first_two() {
    let kb = KnowledgeBase::from_parts(
        Vec::<(&str, &str)>::new(),
        [
            "First paragraph mentions parliament.",
            "Second paragraph mentions Parliament too.",
            "Third paragraph mentions PARLIAMENT as well.",
        ],
    );
    let agent = SubjectAgent::with_knowledge("Civics", kb);
    let answer = agent.resolve("parliament");
    assert_eq!(answer.kind, AnswerKind::Passages { matched: 3, shown: 2 });
    let first = answer.text.find("First").unwrap();
    let second = answer.text.find("Second").unwrap();
    assert!(first < second);
    assert!(!answer.text.contains("Third"));
}

#[test]
fn unknown_subject_always_answers_not_found_with_its_label() {
    let agent = SubjectAgent::new("Geography");
    for q in ["", "what is the capital of india?", "mughal architecture", "?"] {
        assert_eq!(agent.answer(q), not_found_message("Geography"));
    }
}

#[test]
fn polity_capital_of_india() {
    let agent = SubjectAgent::new("Polity");
    assert_eq!(
        agent.answer("What is the capital of India?"),
        "The capital of India is New Delhi."
    );
}

#[test]
fn history_mughal_architecture_culture() {
    let agent = SubjectAgent::new("History");
    let answer = agent.resolve("mughal architecture culture");
    assert!(matches!(answer.kind, AnswerKind::Passages { .. }));
    assert!(answer.text.starts_with(PASSAGE_LEAD_IN));
    assert!(answer.text.ends_with(PASSAGE_DISCLAIMER));
    assert!(answer
        .text
        .contains("The medieval period in India saw the rise of various regional kingdoms"));
}

#[test]
fn economics_nonsense_is_not_found() {
    let agent = SubjectAgent::new("Economics");
    assert_eq!(
        agent.answer("xyzzy nonexistent topic"),
        not_found_message("Economics")
    );
}

#[test]
fn answers_are_never_empty() {
    let registry = AgentRegistry::with_known_subjects();
    let inputs = ["", " ", "a", "india", "what is gdp?", "\u{00e9}t\u{00e9}", "1947"];
    for agent in registry.agents() {
        for q in inputs {
            assert!(!agent.answer(q).is_empty(), "{} / {:?}", agent.subject(), q);
        }
    }
    let stray = registry.agent_for("Unlisted");
    for q in inputs {
        assert!(!stray.answer(q).is_empty());
    }
}
