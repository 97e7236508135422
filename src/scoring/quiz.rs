//! Quiz scoring.

use serde::Serialize;

use crate::catalog::Quiz;
use crate::error::{Error, Result};

/// Outcome of scoring one quiz submission.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub quiz_id: String,
    /// 0-100, floor of the correct fraction.
    pub score: u8,
    pub passed: bool,
    pub correct_count: usize,
    pub total: usize,
    pub per_question: Vec<QuestionResult>,
}

/// Per-question outcome. The explanation is filled only for wrong answers.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub correct: bool,
    pub user_answer: usize,
    pub correct_answer: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Score a submission against a quiz.
///
/// The submission must answer every question exactly once; a length mismatch
/// is rejected before any scoring happens. An out-of-range answer index
/// counts as a wrong answer, not an error.
pub fn score_quiz(quiz: &Quiz, answers: &[usize]) -> Result<QuizReport> {
    if answers.len() != quiz.questions.len() {
        return Err(Error::Validation(format!(
            "quiz {} has {} questions, submission has {} answers",
            quiz.id,
            quiz.questions.len(),
            answers.len()
        )));
    }
    if quiz.questions.is_empty() {
        return Err(Error::Internal(format!("quiz {} has no questions", quiz.id)));
    }

    let mut per_question = Vec::with_capacity(quiz.questions.len());
    let mut correct_count = 0usize;

    for (question, &answer) in quiz.questions.iter().zip(answers) {
        let correct = answer == question.correct_index;
        if correct {
            correct_count += 1;
        }
        per_question.push(QuestionResult {
            question_id: question.id.clone(),
            correct,
            user_answer: answer,
            correct_answer: question.correct_index,
            explanation: (!correct).then(|| question.explanation.clone()),
        });
    }

    let total = quiz.questions.len();
    let score = ((correct_count * 100) / total) as u8;
    let passed = score >= quiz.passing_score;

    Ok(QuizReport {
        quiz_id: quiz.id.clone(),
        score,
        passed,
        correct_count,
        total,
        per_question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_PASSING_SCORE, QuizQuestion};

    fn make_quiz(questions: usize) -> Quiz {
        Quiz {
            id: "test-quiz".into(),
            title: "Test Quiz".into(),
            passing_score: DEFAULT_PASSING_SCORE,
            questions: (0..questions)
                .map(|i| QuizQuestion {
                    id: format!("q{i}"),
                    prompt: format!("Question {i}"),
                    options: vec!["a".into(), "b".into(), "c".into()],
                    correct_index: 1,
                    explanation: format!("Answer {i} is b"),
                })
                .collect(),
        }
    }

    #[test]
    fn all_correct_scores_100() {
        let quiz = make_quiz(5);
        let report = score_quiz(&quiz, &[1, 1, 1, 1, 1]).unwrap();
        assert_eq!(report.score, 100);
        assert!(report.passed);
        assert_eq!(report.correct_count, 5);
        assert!(report.per_question.iter().all(|r| r.explanation.is_none()));
    }

    #[test]
    fn all_wrong_scores_0() {
        let quiz = make_quiz(5);
        let report = score_quiz(&quiz, &[0, 0, 2, 0, 2]).unwrap();
        assert_eq!(report.score, 0);
        assert!(!report.passed);
        assert_eq!(report.correct_count, 0);
        assert!(report.per_question.iter().all(|r| r.explanation.is_some()));
    }

    #[test]
    fn four_of_five_passes_at_70() {
        let quiz = make_quiz(5);
        let report = score_quiz(&quiz, &[1, 1, 1, 1, 0]).unwrap();
        assert_eq!(report.score, 80);
        assert!(report.passed);
    }

    #[test]
    fn three_of_five_fails_at_70() {
        let quiz = make_quiz(5);
        let report = score_quiz(&quiz, &[1, 1, 1, 0, 0]).unwrap();
        assert_eq!(report.score, 60);
        assert!(!report.passed);
    }

    #[test]
    fn score_is_floored() {
        // 2/3 correct = 66.66…, floors to 66
        let quiz = make_quiz(3);
        let report = score_quiz(&quiz, &[1, 1, 0]).unwrap();
        assert_eq!(report.score, 66);
    }

    #[test]
    fn length_mismatch_is_rejected_both_ways() {
        let quiz = make_quiz(5);
        assert!(matches!(
            score_quiz(&quiz, &[1, 1, 1]),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            score_quiz(&quiz, &[1, 1, 1, 1, 1, 1]),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn out_of_range_answer_counts_as_wrong() {
        let quiz = make_quiz(2);
        let report = score_quiz(&quiz, &[1, 99]).unwrap();
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.score, 50);
        assert!(report.per_question[1].explanation.is_some());
    }

    #[test]
    fn explanation_only_on_wrong_answers() {
        let quiz = make_quiz(2);
        let report = score_quiz(&quiz, &[1, 0]).unwrap();
        assert!(report.per_question[0].explanation.is_none());
        assert_eq!(
            report.per_question[1].explanation.as_deref(),
            Some("Answer 1 is b")
        );
    }
}
