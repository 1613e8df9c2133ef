//! Instruction templates for the upstream completion calls. Pure string
//! formatting, one function per task.

/// Question templates only see a bounded prefix of the source material; the
/// notes templates get the full text.
pub const QUESTION_SOURCE_CHAR_LIMIT: usize = 2000;

fn question_source(content: &str) -> &str {
    match content.char_indices().nth(QUESTION_SOURCE_CHAR_LIMIT) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

pub fn mentor(question: &str) -> String {
    format!(
        r#"As Pixie, the friendly AI learning mentor, provide a clear and helpful explanation for the following question:

"{question}"

Please structure your response with:
- Clear headings for main sections
- Bullet points for key concepts
- **Bold text** for important terms
- Step-by-step explanations where needed
- Practical examples if relevant
- Simple, easy-to-understand language

Make sure the response is well-organized and visually clean for the student."#
    )
}

pub fn document_notes(text: &str) -> String {
    format!(
        r#"Create comprehensive and well-structured study notes from the following PDF content:

"{text}"

Structure your response with:

📚 MAIN TOPICS
• Clear section headings
• Key concepts in **bold**
• Important definitions

🎯 KEY POINTS
• Bullet points for main ideas
• Concise explanations
• Practical applications

💡 IMPORTANT CONCEPTS
• Critical theories and principles
• Formulas or rules if any
• Real-world connections

📝 SUMMARY
• Overall takeaways
• Main conclusions
• Key learning objectives

Format with clear spacing between sections and use **bold** for emphasis. Make it visually organized and easy to study from."#
    )
}

pub fn document_questions(text: &str) -> String {
    format!(
        r#"Based on this content: "{source}"

Generate 4-6 practice questions in JSON format only. Return ONLY valid JSON array:

[
  {{
    "question": "clear question text",
    "type": "multiple-choice",
    "difficulty": "easy",
    "options": ["option1", "option2", "option3", "option4"]
  }},
  {{
    "question": "clear question text",
    "type": "short-answer",
    "difficulty": "medium",
    "options": []
  }},
  {{
    "question": "clear question text",
    "type": "conceptual",
    "difficulty": "hard",
    "options": []
  }}
]

Include a mix of question types: multiple-choice, short-answer, and conceptual. Make sure difficulty varies."#,
        source = question_source(text)
    )
}

pub fn video_notes(transcript: &str) -> String {
    format!(
        r#"Transform this YouTube video transcript into engaging, well-organized study notes:

"{transcript}"

Structure your response as:

🎬 VIDEO OVERVIEW
• Main topic and objectives
• Key takeaways
• Relevance to learners

📖 CORE CONTENT
• **Main concepts** explained clearly
• Step-by-step processes
• Important examples

🔍 KEY INSIGHTS
• Critical points to remember
• Common misconceptions
• Practical applications

⭐ HIGHLIGHTS
• Most valuable information
• Actionable tips
• Expert advice

Use clear headings, bullet points, and **bold** for emphasis. Make it engaging and easy to follow!"#
    )
}

pub fn video_questions(transcript: &str) -> String {
    format!(
        r#"Based on this YouTube transcript: "{source}"

Generate 4-6 practice questions in JSON format only. Return ONLY valid JSON array:

[
  {{
    "question": "clear question about the video content",
    "type": "multiple-choice",
    "difficulty": "easy",
    "options": ["option1", "option2", "option3", "option4"]
  }},
  {{
    "question": "clear conceptual question",
    "type": "conceptual",
    "difficulty": "medium",
    "options": []
  }},
  {{
    "question": "clear application question",
    "type": "short-answer",
    "difficulty": "hard",
    "options": []
  }}
]

Include different question types and difficulty levels based on the video content."#,
        source = question_source(transcript)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentor_embeds_the_question_verbatim() {
        let prompt = mentor("What is a derivative?");
        assert!(prompt.contains("\"What is a derivative?\""));
        assert!(prompt.starts_with("As Pixie"));
    }

    #[test]
    fn question_source_takes_the_first_2000_chars() {
        let long = "a".repeat(QUESTION_SOURCE_CHAR_LIMIT + 500);
        assert_eq!(
            question_source(&long).chars().count(),
            QUESTION_SOURCE_CHAR_LIMIT
        );

        let short = "short text";
        assert_eq!(question_source(short), short);
    }

    #[test]
    fn question_source_respects_char_boundaries() {
        // Multi-byte chars must never be split mid-codepoint.
        let long = "é".repeat(QUESTION_SOURCE_CHAR_LIMIT + 10);
        let cut = question_source(&long);
        assert_eq!(cut.chars().count(), QUESTION_SOURCE_CHAR_LIMIT);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn question_templates_truncate_long_sources() {
        let long = "x".repeat(QUESTION_SOURCE_CHAR_LIMIT + 500);
        let prompt = document_questions(&long);
        assert!(prompt.contains(&"x".repeat(QUESTION_SOURCE_CHAR_LIMIT)));
        assert!(!prompt.contains(&"x".repeat(QUESTION_SOURCE_CHAR_LIMIT + 1)));
    }

    #[test]
    fn notes_templates_keep_the_full_source() {
        let long = "y".repeat(QUESTION_SOURCE_CHAR_LIMIT + 500);
        assert!(document_notes(&long).contains(&long));
        assert!(video_notes(&long).contains(&long));
    }

    #[test]
    fn question_templates_demand_a_json_array() {
        let text = "Photosynthesis converts light energy into chemical energy.";
        assert!(document_questions(text).contains("Return ONLY valid JSON array"));
        assert!(video_questions(text).contains("Return ONLY valid JSON array"));
    }
}
