//! Text handed to the interpreter: the hexagram context paragraph and the
//! full oracle prompt that wraps it.

use crate::interpret::{ChangingLinesInfo, HexagramInfo};

/// One paragraph describing both hexagrams and their changing-line advice.
///
/// The question is appended only when it is non-blank.
pub fn format_query(info: &ChangingLinesInfo, question: &str) -> String {
    let mut out = format!(
        "inner state of awareness: {}, body hexagram number: {}, \
         line change related to advice to transition forward to the external state of awareness: {}, \
         outer state of awareness: {}, environment hexagram number: {}, \
         line change related to advice to transition back to the internal state of awareness: {}.",
        display_name(&info.inner),
        display_number(&info.inner),
        advice(&info.inner),
        display_name(&info.outer),
        display_number(&info.outer),
        advice(&info.outer),
    );
    let question = question.trim();
    if !question.is_empty() {
        out.push_str(" question: ");
        out.push_str(question);
    }
    out
}

/// Wrap the context paragraph and the question in the oracle instructions.
pub fn compose_prompt(context: &str, question: &str) -> String {
    let question = match question.trim() {
        "" => "(no question given)",
        q => q,
    };
    format!(
        "Act as an I-Ching oracle and provide life advice based on the user's question and the hexagram details.

**User Question:**
{question}

**Hexagram Information:**
{context}

**Instructions:**
1. Interpret the user's question, if provided.
2. Read the inner and the outer hexagram, making a connection between past and future.
3. Link the inner hexagram to the outer hexagram by interpreting the changing lines.
4. Combine the user's question with the hexagrams and lines to tell a story.
5. Offer guidance on how the user can contemplate their question and the I-Ching's wisdom.
"
    )
}

fn display_name(info: &HexagramInfo) -> &str {
    if info.name.is_empty() {
        "unknown"
    } else {
        &info.name
    }
}

fn display_number(info: &HexagramInfo) -> String {
    info.number
        .map_or_else(|| "unknown".to_string(), |n| n.to_string())
}

fn advice(info: &HexagramInfo) -> String {
    let parts: Vec<String> = info
        .annotated()
        .map(|(pos, text)| format!("line {pos}: {}", text.trim_end().trim_end_matches('.')))
        .collect();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ChangingLinesInfo {
        let mut inner_lines = vec![String::new(); 6];
        inner_lines[3] = "Wait at the ford.".to_string();
        let mut outer_lines = vec![String::new(); 6];
        outer_lines[2] = "Follow the river.".to_string();
        ChangingLinesInfo {
            inner: HexagramInfo {
                key: "101010".to_string(),
                name: "Already Fording".to_string(),
                number: Some(63),
                changing_lines: inner_lines,
            },
            outer: HexagramInfo {
                key: "100110".to_string(),
                name: "Following".to_string(),
                number: Some(17),
                changing_lines: outer_lines,
            },
        }
    }

    #[test]
    fn query_embeds_both_hexagrams() {
        insta::assert_snapshot!(format_query(&info(), ""), @"inner state of awareness: Already Fording, body hexagram number: 63, line change related to advice to transition forward to the external state of awareness: line 4: Wait at the ford, outer state of awareness: Following, environment hexagram number: 17, line change related to advice to transition back to the internal state of awareness: line 3: Follow the river.");
    }

    #[test]
    fn advice_texts_keep_single_punctuation() {
        let mut info = info();
        info.inner.changing_lines[0] = "Hidden dragon. Do not act.".to_string();
        let q = format_query(&info, "");
        assert!(q.contains("line 1: Hidden dragon. Do not act; line 4: Wait at the ford, "));
        assert!(!q.contains(".."));
        assert!(!q.contains(".,"));
    }

    #[test]
    fn question_is_appended_when_present() {
        let q = format_query(&info(), "  Should I move?  ");
        assert!(q.ends_with(" question: Should I move?"));
        assert!(!format_query(&info(), "   ").contains("question:"));
    }

    #[test]
    fn placeholder_reads_unknown() {
        let mut info = info();
        info.outer = HexagramInfo::placeholder(&hx_core::HexagramKey::parse("000000").unwrap());
        let q = format_query(&info, "");
        assert!(q.contains("outer state of awareness: unknown"));
        assert!(q.contains("environment hexagram number: unknown"));
        assert!(q.ends_with("internal state of awareness: none."));
    }

    #[test]
    fn prompt_contains_context_and_question() {
        let prompt = compose_prompt("CONTEXT", "Where next?");
        assert!(prompt.starts_with("Act as an I-Ching oracle"));
        assert!(prompt.contains("**User Question:**\nWhere next?\n"));
        assert!(prompt.contains("**Hexagram Information:**\nCONTEXT\n"));
        assert!(compose_prompt("c", "").contains("(no question given)"));
    }
}
