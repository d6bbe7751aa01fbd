//! Terminal rendering of API records.
//!
//! Every function here is pure: it takes records and returns the text to
//! print. Relational fields go through the models' `display_*` accessors so
//! the name-or-id fallback is applied per field.

use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{text_or_missing, Article, Group, Ticket, User};

/// Default number of search results shown.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

const DOUBLE_RULE: &str = "═══════════════════";
const SINGLE_RULE: &str = "─────────────────────";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// Removes every `<...>` sequence and trims surrounding whitespace.
///
/// Entities such as `&amp;` are left as they are.
pub fn strip_markup(body: &str) -> String {
    MARKUP_TAG.replace_all(body, "").trim().to_string()
}

/// The displayed slice of a result set.
#[derive(Debug, PartialEq, Eq)]
pub struct Limited<'a, T> {
    /// Results to display, in server order.
    pub shown: &'a [T],
    /// Number of results the server returned.
    pub total: usize,
}

impl<T> Limited<'_, T> {
    /// Returns the notice to print when results were cut off.
    pub fn notice(&self) -> Option<String> {
        (self.total > self.shown.len()).then(|| {
            format!(
                "Showing {} of {} results. Use --limit to show more.",
                self.shown.len(),
                self.total
            )
        })
    }
}

/// Keeps the first `limit` results without reordering.
pub fn limit_results<T>(results: &[T], limit: usize) -> Limited<'_, T> {
    Limited {
        shown: &results[..results.len().min(limit)],
        total: results.len(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn heading(title: &str) -> String {
    format!("{}\n{}\n\n", title, "═".repeat(title.chars().count()))
}

/// Formats one page of tickets.
pub fn format_ticket_list(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets found.".to_string();
    }

    let mut output = format!("Found {} tickets:\n\n", tickets.len());

    for ticket in tickets {
        output.push_str(&format!(
            "#{} - {}\n",
            ticket.display_number(),
            ticket.display_title()
        ));
        output.push_str(&format!("  ID: {}\n", ticket.id));
        output.push_str(&format!("  State: {}\n", ticket.display_state()));
        output.push_str(&format!("  Priority: {}\n", ticket.display_priority()));
        output.push_str(&format!("  Updated: {}\n", ticket.display_updated()));
        output.push('\n');
    }

    output
}

/// Formats a ticket followed by all of its articles.
pub fn format_ticket_details(ticket: &Ticket, articles: &[Article]) -> String {
    let mut output = heading("Ticket Details:");

    output.push_str(&format!("Number: #{}\n", ticket.display_number()));
    output.push_str(&format!("Title: {}\n", ticket.display_title()));
    output.push_str(&format!("ID: {}\n", ticket.id));
    output.push_str(&format!("State: {}\n", ticket.display_state()));
    output.push_str(&format!("Priority: {}\n", ticket.display_priority()));
    output.push_str(&format!("Group: {}\n", ticket.display_group()));
    output.push_str(&format!("Owner: {}\n", ticket.display_owner()));
    output.push_str(&format!("Customer: {}\n", ticket.display_customer()));
    output.push_str(&format!("Created: {}\n", ticket.display_created()));
    output.push_str(&format!("Updated: {}\n", ticket.display_updated()));

    if articles.is_empty() {
        output.push_str("\nNo articles found for this ticket.\n");
        return output;
    }

    output.push_str(&format!("\nArticles ({}):\n", articles.len()));
    output.push_str(DOUBLE_RULE);
    output.push_str("\n\n");

    for (index, article) in articles.iter().enumerate() {
        output.push_str(&format_article(index + 1, article));
    }

    output
}

/// Formats one article; `position` is 1-based.
pub fn format_article(position: usize, article: &Article) -> String {
    let mut output = format!("Article #{} (ID: {})\n", position, article.id);

    output.push_str(&format!("From: {}\n", article.display_from()));
    if let Some(to) = article.to.as_deref().filter(|s| !s.is_empty()) {
        output.push_str(&format!("To: {}\n", to));
    }
    if let Some(cc) = article.cc.as_deref().filter(|s| !s.is_empty()) {
        output.push_str(&format!("Cc: {}\n", cc));
    }
    if let Some(subject) = article.subject.as_deref().filter(|s| !s.is_empty()) {
        output.push_str(&format!("Subject: {}\n", subject));
    }
    output.push_str(&format!("Type: {}\n", article.display_type()));
    output.push_str(&format!("Sender: {}\n", article.display_sender()));
    output.push_str(&format!("Internal: {}\n", yes_no(article.internal)));
    output.push_str(&format!("Created: {}\n", article.display_created()));
    output.push_str(&format!("Created by: {}\n", article.display_created_by()));

    output.push_str("\nBody:\n");
    output.push_str(SINGLE_RULE);
    output.push('\n');
    output.push_str(&strip_markup(article.raw_body()));
    output.push('\n');
    output.push_str(SINGLE_RULE);
    output.push_str("\n\n");

    output
}

/// Formats search results, showing at most `limit` of them.
pub fn format_search_results(
    query: &str,
    results: &[Ticket],
    limit: usize,
    detailed: bool,
) -> String {
    let mut output = format!("Searching with query: {}\n\n", query);

    if results.is_empty() {
        output.push_str("No tickets found matching your criteria.");
        return output;
    }

    let limited = limit_results(results, limit);

    output.push_str(&format!(
        "Found {} ticket(s), showing {}:\n\n",
        limited.total,
        limited.shown.len()
    ));

    for ticket in limited.shown {
        output.push_str(&format!(
            "#{} - {}\n",
            ticket.display_number(),
            ticket.display_title()
        ));
        output.push_str(&format!("  ID: {}\n", ticket.id));
        output.push_str(&format!("  State: {}\n", ticket.display_state()));

        if detailed {
            output.push_str(&format!("  Priority: {}\n", ticket.display_priority()));
            output.push_str(&format!("  Group: {}\n", ticket.display_group()));
            output.push_str(&format!("  Customer: {}\n", ticket.display_customer()));
            output.push_str(&format!("  Owner: {}\n", ticket.display_owner()));
            output.push_str(&format!("  Created: {}\n", ticket.display_created()));
            output.push_str(&format!("  Updated: {}\n", ticket.display_updated()));
        }

        output.push('\n');
    }

    if let Some(notice) = limited.notice() {
        output.push_str(&notice);
        output.push('\n');
    }

    output
}

/// Formats the result of a create operation.
pub fn format_created_ticket(ticket: &Ticket, web_url: &str) -> String {
    let mut output = String::from("Ticket created successfully!\n");
    output.push_str(&format!("Number: #{}\n", ticket.display_number()));
    output.push_str(&format!("ID: {}\n", ticket.id));
    output.push_str(&format!("URL: {}\n", web_url));
    output
}

/// Formats the result of an update operation.
pub fn format_updated_ticket(ticket: &Ticket) -> String {
    let mut output = format!(
        "Ticket #{} updated successfully!\n\n",
        ticket.display_number()
    );
    output.push_str(&format!("Title: {}\n", ticket.display_title()));
    output.push_str(&format!("State: {}\n", ticket.display_state()));
    output.push_str(&format!("Priority: {}\n", ticket.display_priority()));
    output.push_str(&format!("Group: {}\n", ticket.display_group()));
    output.push_str(&format!("Owner: {}\n", ticket.display_owner()));
    output.push_str(&format!("Updated: {}\n", ticket.display_updated()));
    output
}

pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let mut output = format!("Found {} users:\n\n", users.len());

    for user in users {
        output.push_str(&format!(
            "{} ({})\n",
            user.display_name(),
            user.display_login()
        ));
        output.push_str(&format!("  ID: {}\n", user.id));
        output.push_str(&format!("  Email: {}\n", user.display_email()));
        output.push_str(&format!("  Active: {}\n", yes_no(user.active)));
        output.push('\n');
    }

    output
}

pub fn format_user_details(user: &User) -> String {
    let mut output = heading("User Details:");
    output.push_str(&format!("Name: {}\n", user.display_name()));
    output.push_str(&format!("Login: {}\n", user.display_login()));
    output.push_str(&format!("Email: {}\n", user.display_email()));
    output.push_str(&format!("ID: {}\n", user.id));
    output.push_str(&format!("Active: {}\n", yes_no(user.active)));
    if !user.role_ids.is_empty() {
        let roles: Vec<String> = user.role_ids.iter().map(|r| r.to_string()).collect();
        output.push_str(&format!("Role IDs: {}\n", roles.join(", ")));
    }
    output.push_str(&format!(
        "Created: {}\n",
        text_or_missing(user.created_at.as_deref())
    ));
    output.push_str(&format!(
        "Updated: {}\n",
        text_or_missing(user.updated_at.as_deref())
    ));
    output
}

pub fn format_current_user(user: &User) -> String {
    let mut output = heading("Current User:");
    output.push_str(&format!("Name: {}\n", user.display_name()));
    output.push_str(&format!("Login: {}\n", user.display_login()));
    output.push_str(&format!("Email: {}\n", user.display_email()));
    output.push_str(&format!("ID: {}\n", user.id));
    output
}

pub fn format_group_list(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups found.".to_string();
    }

    let mut output = format!("Found {} groups:\n\n", groups.len());

    for group in groups {
        output.push_str(&format!("{}\n", group.display_name()));
        output.push_str(&format!("  ID: {}\n", group.id));
        output.push_str(&format!("  Active: {}\n", yes_no(group.active)));
        output.push('\n');
    }

    output
}

pub fn format_group_details(group: &Group) -> String {
    let mut output = heading("Group Details:");
    output.push_str(&format!("Name: {}\n", group.display_name()));
    output.push_str(&format!("ID: {}\n", group.id));
    output.push_str(&format!("Active: {}\n", yes_no(group.active)));
    output.push_str(&format!("Created: {}\n", group.display_created()));
    output.push_str(&format!("Updated: {}\n", group.display_updated()));
    output
}

/// Writes command output followed by a newline.
///
/// A reader that closed the pipe early (`zm tickets list | head -1`) is not
/// an error.
pub fn write_output<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    match writeln!(out, "{}", text.trim_end()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_output_trims_and_terminates() {
        let mut buf = Vec::new();
        write_output(&mut buf, "Found 2 tickets:\n\n").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Found 2 tickets:\n");
    }

    #[test]
    fn test_write_output_ignores_closed_pipe() {
        assert!(write_output(&mut ClosedPipe, "No tickets found.").is_ok());
    }

    #[test]
    fn test_write_output_reports_other_errors() {
        assert!(write_output(&mut FullDisk, "No tickets found.").is_err());
    }

    fn ticket(id: u64) -> Ticket {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "number": format!("{}", 31000 + id),
            "title": format!("Ticket {}", id),
            "state": "open",
            "state_id": 2,
            "priority_id": 2,
            "updated_at": "2024-02-02T11:30:00.000Z"
        }))
        .unwrap()
    }

    fn article(body: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "from": "Nicole Braun <nicole@example.com>",
            "to": "",
            "body": body,
            "type": "email",
            "sender_id": 2,
            "internal": true,
            "created_by_id": 3
        }))
        .unwrap()
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_markup_trims_and_keeps_entities() {
        assert_eq!(
            strip_markup("\n  <div>Fish &amp; chips<br/></div>\n"),
            "Fish &amp; chips"
        );
        assert_eq!(strip_markup("plain text"), "plain text");
        assert_eq!(strip_markup("a < b"), "a < b");
    }

    #[test]
    fn test_limit_results_caps_and_notices() {
        let results: Vec<u32> = (0..75).collect();
        let limited = limit_results(&results, 50);
        assert_eq!(limited.shown.len(), 50);
        assert_eq!(limited.shown[0], 0);
        assert_eq!(limited.shown[49], 49);
        assert_eq!(limited.total, 75);
        assert!(limited
            .notice()
            .unwrap()
            .starts_with("Showing 50 of 75 results."));
    }

    #[test]
    fn test_limit_results_under_limit_has_no_notice() {
        let results = [1, 2, 3];
        let limited = limit_results(&results, 50);
        assert_eq!(limited.shown, &[1, 2, 3]);
        assert!(limited.notice().is_none());
    }

    #[test]
    fn test_format_ticket_list_empty() {
        assert_eq!(format_ticket_list(&[]), "No tickets found.");
    }

    #[test]
    fn test_format_ticket_list_uses_fallbacks() {
        let output = format_ticket_list(&[ticket(1)]);
        assert!(output.contains("Found 1 tickets:"));
        assert!(output.contains("#31001 - Ticket 1"));
        assert!(output.contains("  State: open\n"));
        assert!(output.contains("  Priority: 2\n"));
    }

    #[test]
    fn test_format_search_results_limit_notice() {
        let results: Vec<Ticket> = (1..=75).map(ticket).collect();
        let output = format_search_results("state.name:open", &results, 50, false);
        assert!(output.starts_with("Searching with query: state.name:open\n"));
        assert!(output.contains("Found 75 ticket(s), showing 50:"));
        assert!(output.contains("#31050 - Ticket 50"));
        assert!(!output.contains("#31051 - Ticket 51"));
        assert!(output.contains("Showing 50 of 75 results."));
        assert!(!output.contains("Priority:"));
    }

    #[test]
    fn test_format_search_results_detailed() {
        let output = format_search_results("state.name:open", &[ticket(1)], 50, true);
        assert!(output.contains("  Priority: 2\n"));
        assert!(output.contains("  Owner: -\n"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_format_search_results_empty() {
        let output = format_search_results("state.name:x", &[], 50, false);
        assert!(output.ends_with("No tickets found matching your criteria."));
    }

    #[test]
    fn test_format_ticket_details_with_articles() {
        let output = format_ticket_details(&ticket(1), &[article("<p>Hello <b>world</b></p>")]);
        assert!(output.starts_with("Ticket Details:\n"));
        assert!(output.contains("Articles (1):"));
        assert!(output.contains("Article #1 (ID: 7)"));
        assert!(output.contains("Type: email\n"));
        assert!(output.contains("Sender: 2\n"));
        assert!(output.contains("Internal: Yes\n"));
        assert!(output.contains("Created by: 3\n"));
        assert!(output.contains("\nHello world\n"));
        assert!(!output.contains("To:"));
    }

    #[test]
    fn test_format_ticket_details_without_articles() {
        let output = format_ticket_details(&ticket(1), &[]);
        assert!(output.contains("No articles found for this ticket."));
    }

    #[test]
    fn test_format_created_ticket() {
        let output = format_created_ticket(&ticket(5), "https://h.example.com/#ticket/zoom/5");
        assert_eq!(
            output,
            "Ticket created successfully!\nNumber: #31005\nID: 5\nURL: https://h.example.com/#ticket/zoom/5\n"
        );
    }

    #[test]
    fn test_format_user_and_group_lists_empty() {
        assert_eq!(format_user_list(&[]), "No users found.");
        assert_eq!(format_group_list(&[]), "No groups found.");
    }

    #[test]
    fn test_format_group_details() {
        let group: Group =
            serde_json::from_value(serde_json::json!({"id": 1, "name": "Users", "active": true}))
                .unwrap();
        let output = format_group_details(&group);
        assert!(output.starts_with("Group Details:\n══════════════\n"));
        assert!(output.contains("Active: Yes\n"));
    }
}
