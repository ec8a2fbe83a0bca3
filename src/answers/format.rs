//! Display formatting for answer listings.

/// Entries longer than this are clamped when listed.
const LIST_CLAMP_LENGTH: usize = 40;
const ELLIPSIS: &str = "...";

/// Reply used when listing a conversation with no answers.
pub const NO_ANSWERS_REPLY: &str = "There are currently no answers in the 8 ball.";

/// Makes an answer fit on one short line. The stored answer is not touched.
#[must_use]
pub fn sanitize_for_list(answer: &str) -> String {
    let single_line = answer.trim().replace('\n', " ");
    if single_line.chars().count() > LIST_CLAMP_LENGTH {
        let mut clamped: String = single_line
            .chars()
            .take(LIST_CLAMP_LENGTH - ELLIPSIS.len())
            .collect();
        clamped.push_str(ELLIPSIS);
        clamped
    } else {
        single_line
    }
}

/// Renders answers as a numbered list, one per line, starting at 1.
#[must_use]
pub fn render_list(answers: &[String]) -> String {
    if answers.is_empty() {
        return NO_ANSWERS_REPLY.to_string();
    }

    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("{}. {}", i + 1, sanitize_for_list(answer)))
        .collect::<Vec<_>>()
        .join("\n")
}
