//! `gurupulse show` command.

use crate::guidance::KnowledgeBase;

/// Execute the `show` command.
///
/// With no arguments lists subjects; with a subject lists its grade bands;
/// with a subject and grade band lists the categories that have guidance.
///
/// # Errors
///
/// Returns an error string if the subject or grade band is unknown.
pub fn run(
    knowledge: &KnowledgeBase,
    subject: Option<&str>,
    grade: Option<&str>,
) -> Result<(), String> {
    println!("{}", render(knowledge, subject, grade)?);
    Ok(())
}

/// Renders the listing for the given level of the knowledge base.
///
/// # Errors
///
/// Returns an error string if the subject or grade band is unknown.
pub fn render(
    knowledge: &KnowledgeBase,
    subject: Option<&str>,
    grade: Option<&str>,
) -> Result<String, String> {
    let Some(subject) = subject else {
        let subjects: Vec<&str> = knowledge.subjects().collect();
        if subjects.is_empty() {
            return Ok("No subjects found in knowledge base.".to_string());
        }
        return Ok(listing("Subjects:", subjects));
    };

    let grades = knowledge.subject(subject).ok_or_else(|| {
        format!(
            "Unknown subject '{subject}'. Available subjects: {}",
            knowledge.subjects().collect::<Vec<_>>().join(", ")
        )
    })?;

    let Some(grade) = grade else {
        return Ok(listing(
            &format!("Grade bands for {subject}:"),
            grades.keys().map(String::as_str).collect(),
        ));
    };

    let categories = grades.get(grade).ok_or_else(|| {
        format!(
            "Unknown grade band '{grade}' for {subject}. Available grade bands: {}",
            grades.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
        )
    })?;

    Ok(listing(
        &format!("Categories for {subject} / {grade}:"),
        categories.keys().map(String::as_str).collect(),
    ))
}

fn listing(title: &str, items: Vec<&str>) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(items.into_iter().map(|item| format!("  {item}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::GuidanceEntry;

    fn knowledge() -> KnowledgeBase {
        [("math", "grade1-2", "a"), ("math", "grade3-5", "b"), ("science", "grade1-2", "c")]
            .into_iter()
            .map(|(s, g, c)| {
                let entry = GuidanceEntry {
                    now: "n".to_string(),
                    why: "w".to_string(),
                    next: "x".to_string(),
                };
                (s.to_string(), g.to_string(), c.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn lists_subjects() {
        let text = render(&knowledge(), None, None).unwrap();
        assert_eq!(text, "Subjects:\n  math\n  science");
    }

    #[test]
    fn lists_grades_of_subject() {
        let text = render(&knowledge(), Some("math"), None).unwrap();
        assert_eq!(text, "Grade bands for math:\n  grade1-2\n  grade3-5");
    }

    #[test]
    fn lists_categories_of_grade() {
        let text = render(&knowledge(), Some("math"), Some("grade3-5")).unwrap();
        assert_eq!(text, "Categories for math / grade3-5:\n  b");
    }

    #[test]
    fn unknown_subject_lists_alternatives() {
        let err = render(&knowledge(), Some("art"), None).unwrap_err();
        assert!(err.contains("Unknown subject 'art'"));
        assert!(err.contains("math, science"));
    }

    #[test]
    fn unknown_grade_lists_alternatives() {
        let err = render(&knowledge(), Some("science"), Some("grade6-8")).unwrap_err();
        assert!(err.contains("Unknown grade band 'grade6-8'"));
        assert!(err.contains("grade1-2"));
    }

    #[test]
    fn empty_knowledge_base() {
        let text = render(&KnowledgeBase::default(), None, None).unwrap();
        assert_eq!(text, "No subjects found in knowledge base.");
    }
}
