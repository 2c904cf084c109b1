//! Server-rendered HTML pages for the multi-step flow.
//!
//! Small builder functions over `format!`; every user-supplied value passes
//! through [`escape`] before it reaches markup.

use pathway_core::model::Question;
use pathway_core::planner::PlanEntry;
use pathway_core::quiz::SkillLevel;
use services::{CompressedPrompt, CompressionStatus};

pub const BEGINNER_LABEL: &str = "Beginner 🌱";

/// Presentation label for a quiz level.
#[must_use]
pub fn level_label(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Intermediate => "Intermediate 🚀",
        SkillLevel::NeedsRevision => "Needs Revision 🔄",
    }
}

/// Escape the XML-significant characters for text and attribute positions.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · Learning Path Recommender</title>\n</head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn hidden_fields(name: &str, course: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"name\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"course\" value=\"{}\">",
        escape(name),
        escape(course)
    )
}

/// Landing page: name field plus a course selector.
#[must_use]
pub fn index(courses: &[String]) -> String {
    let options: String = courses
        .iter()
        .map(|c| format!("<option value=\"{0}\">{0}</option>\n", escape(c)))
        .collect();

    let body = format!(
        "<form method=\"post\" action=\"/\">\n\
         <label>Your name: <input type=\"text\" name=\"name\" required></label>\n\
         <label>Course: <select name=\"course\">\n{options}</select></label>\n\
         <button type=\"submit\">Start</button>\n</form>"
    );
    layout("Choose a course", &body)
}

/// Experience-level selection for the chosen course.
#[must_use]
pub fn experience(name: &str, course: &str) -> String {
    let body = format!(
        "<p>Hi {}, how much {} do you already know?</p>\n\
         <form method=\"post\" action=\"/experience\">\n{}\n\
         <label><input type=\"radio\" name=\"level\" value=\"beginner\" checked> Beginner</label>\n\
         <label><input type=\"radio\" name=\"level\" value=\"experienced\"> I know some already</label>\n\
         <button type=\"submit\">Continue</button>\n</form>",
        escape(name),
        escape(course),
        hidden_fields(name, course)
    );
    layout("Experience level", &body)
}

/// Day-count selection for the beginner path.
#[must_use]
pub fn duration(name: &str, course: &str) -> String {
    let body = format!(
        "<p>How many days do you want to spend on {}?</p>\n\
         <form method=\"post\" action=\"/duration\">\n{}\n\
         <label>Days: <input type=\"number\" name=\"days\" min=\"1\" value=\"7\"></label>\n\
         <button type=\"submit\">Build my plan</button>\n</form>",
        escape(course),
        hidden_fields(name, course)
    );
    layout("Plan duration", &body)
}

/// Placement quiz with one radio group per question.
#[must_use]
pub fn quiz(name: &str, course: &str, questions: &[Question]) -> String {
    let mut items = String::new();
    for question in questions {
        items.push_str(&format!("<fieldset>\n<legend>{}</legend>\n", escape(question.prompt())));
        for option in question.options() {
            items.push_str(&format!(
                "<label><input type=\"radio\" name=\"{}\" value=\"{}\"> {}</label>\n",
                escape(question.id()),
                escape(option),
                escape(option)
            ));
        }
        items.push_str("</fieldset>\n");
    }

    let intro = if questions.is_empty() {
        "<p>No placement questions exist for this course yet; submit to get a starting roadmap.</p>\n".to_string()
    } else {
        format!("<p>Answer these to place your {} level:</p>\n", escape(course))
    };

    let body = format!(
        "{intro}<form method=\"post\" action=\"/quiz\">\n{}\n{items}\
         <button type=\"submit\">Submit answers</button>\n</form>",
        hidden_fields(name, course)
    );
    layout("Placement quiz", &body)
}

/// Final roadmap page for both the beginner and the quiz path.
#[must_use]
pub fn roadmap(
    name: &str,
    course: &str,
    level: &str,
    score: Option<(usize, usize)>,
    entries: &[PlanEntry],
    hint: &CompressedPrompt,
) -> String {
    let mut body = format!(
        "<p>{}, here is your {} roadmap ({}):</p>\n",
        escape(name),
        escape(course),
        escape(level)
    );

    if let Some((score, total)) = score {
        body.push_str(&format!("<p>Quiz score: {score}/{total}</p>\n"));
    }

    if entries.is_empty() {
        body.push_str("<p>No days to plan — pick another course and try again.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Day</th><th>Topic</th></tr>\n");
        for entry in entries {
            body.push_str(&format!(
                "<tr><td>Day {}</td><td>{}</td></tr>\n",
                entry.day,
                escape(&entry.topic)
            ));
        }
        body.push_str("</table>\n");
    }

    let note = match hint.status {
        CompressionStatus::Live => "",
        CompressionStatus::Fallback => " <em>(offline hint)</em>",
    };
    body.push_str(&format!("<p>Hint: {}{note}</p>", escape(&hint.text)));

    layout("Your roadmap", &body)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
