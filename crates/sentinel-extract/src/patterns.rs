//! Classification rules for activity log lines.
//!
//! The rule set is data, not control flow: an ordered table of
//! (pattern, kind, exclusion) entries, checked in order with the FIRST
//! match winning. Rule order encodes the disambiguation policy:
//!
//! 1. Assignment phrasing beats everything: an assignment line carries a
//!    technician identity but is an informational marker, never a
//!    response.
//! 2. Follow-up and status-question phrasing is a user response, even on
//!    a line that also carries technician identity.
//! 3. Technician attribution markers make a technician response, minus an
//!    exclusion for lines that are purely status questions.
//!
//! Lines matching no rule default to [`EventKind::UserResponse`] at the
//! extraction layer (everything else attributable to the requester).

use regex::Regex;

use sentinel_models::EventKind;

/// One entry in the ordered classification table.
#[derive(Debug)]
pub struct ClassifierRule {
    /// Stable name for diagnostics and rule-by-rule tests.
    pub name: &'static str,
    /// Pattern that selects this rule.
    pub pattern: Regex,
    /// Event kind produced on match.
    pub kind: EventKind,
    /// Optional exclusion: a line matching this does not match the rule.
    pub exclude: Option<Regex>,
}

impl ClassifierRule {
    /// Returns true if the rule selects this line text.
    pub fn matches(&self, text: &str) -> bool {
        if !self.pattern.is_match(text) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(text),
            None => true,
        }
    }
}

/// Phrasing that marks a line as an assignment or reassignment.
const ASSIGNMENT_PATTERN: &str = r"(?i)\b(?:re)?assigned\s+to\b|\bassignment\s+(?:of|changed|updated)\b|\bticket\s+(?:has\s+been\s+)?assigned\b|\btransferr?ed\s+to\b";

/// Follow-up and status-question phrasing. These read as requester
/// activity (or as a technician asking rather than responding) and must
/// never satisfy the first-response milestone.
const FOLLOW_UP_PATTERN: &str = r"(?i)\bany\s+updates?\b|\bfollow(?:ing)?[\s-]*up\b|\bstill\s+(?:waiting|broken|not\s+working|an?\s+issue)\b|\bplease\s+(?:update|advise|respond)\b|\bchecking\s+in\b|\bwhen\s+will\s+this\b|\bcan\s+you\s+confirm\b|\bdid\s+(?:this|that)\s+(?:help|work)\b";

/// Explicit technician attribution in the line text itself.
const TECHNICIAN_PATTERN: &str =
    r"(?i)\(tech(?:nician)?\)|\btechnician\b|\bsupport\s+(?:agent|engineer)\b|\bhelp\s?desk\b|\bservice\s+desk\b";

/// Builds the default ordered rule table.
///
/// Rules are checked in order and the first match wins, so more specific
/// phrasing (assignment, follow-up) must come before the general
/// technician-attribution rule.
pub fn default_rules() -> Vec<ClassifierRule> {
    vec![
        ClassifierRule {
            name: "assignment",
            pattern: Regex::new(ASSIGNMENT_PATTERN).expect("Invalid assignment pattern"),
            kind: EventKind::Assignment,
            exclude: None,
        },
        ClassifierRule {
            name: "follow_up",
            pattern: Regex::new(FOLLOW_UP_PATTERN).expect("Invalid follow-up pattern"),
            kind: EventKind::UserResponse,
            exclude: None,
        },
        ClassifierRule {
            name: "technician_activity",
            pattern: Regex::new(TECHNICIAN_PATTERN).expect("Invalid technician pattern"),
            kind: EventKind::TechnicianResponse,
            // Must not claim assignment or question lines regardless of
            // table order.
            exclude: Some(
                Regex::new(&format!("{ASSIGNMENT_PATTERN}|{FOLLOW_UP_PATTERN}"))
                    .expect("Invalid technician exclusion pattern"),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(rules: &'a [ClassifierRule], name: &str) -> &'a ClassifierRule {
        rules.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_assignment_rule_matches_assignment_phrasing() {
        let rules = default_rules();
        let assignment = rule(&rules, "assignment");

        assert!(assignment.matches("Ticket has been assigned to technician: Jane Smith"));
        assert!(assignment.matches("reassigned to Bob"));
        assert!(assignment.matches("Transferred to the network team"));
        assert!(!assignment.matches("I fixed the issue"));
    }

    #[test]
    fn test_follow_up_rule_matches_questions() {
        let rules = default_rules();
        let follow_up = rule(&rules, "follow_up");

        assert!(follow_up.matches("any updates?"));
        assert!(follow_up.matches("Any update on this please"));
        assert!(follow_up.matches("just following up"));
        assert!(follow_up.matches("still waiting on a reply"));
        assert!(follow_up.matches("can you confirm this is fixed?"));
        assert!(!follow_up.matches("Password reset completed"));
    }

    #[test]
    fn test_technician_rule_matches_attribution() {
        let rules = default_rules();
        let tech = rule(&rules, "technician_activity");

        assert!(tech.matches("Jane Smith (Technician): reset the password"));
        assert!(tech.matches("Helpdesk applied the patch"));
        assert!(tech.matches("support agent replaced the cable"));
        assert!(!tech.matches("Bob: my screen is black"));
    }

    #[test]
    fn test_technician_rule_excludes_status_questions() {
        let rules = default_rules();
        let tech = rule(&rules, "technician_activity");

        // Technician-attributed, but purely a question: excluded.
        assert!(!tech.matches("Jane Smith (Technician): any updates from the user?"));
        assert!(!tech.matches("Technician: did this help?"));
    }

    #[test]
    fn test_technician_rule_excludes_assignment_phrasing() {
        let rules = default_rules();
        let tech = rule(&rules, "technician_activity");

        assert!(!tech.matches("Ticket assigned to technician: Jane Smith"));
    }

    #[test]
    fn test_first_match_wins_assignment_over_technician() {
        // A line matching both assignment and technician phrasing must
        // classify as Assignment under the table order.
        let rules = default_rules();
        let line = "Ticket has been assigned to technician: Jane Smith";

        let kind = rules
            .iter()
            .find(|r| r.matches(line))
            .map(|r| r.kind)
            .unwrap();
        assert_eq!(kind, EventKind::Assignment);
    }

    #[test]
    fn test_first_match_wins_follow_up_over_technician() {
        let rules = default_rules();
        let line = "Jane Smith (Technician): any updates?";

        let kind = rules
            .iter()
            .find(|r| r.matches(line))
            .map(|r| r.kind)
            .unwrap();
        assert_eq!(kind, EventKind::UserResponse);
    }

    #[test]
    fn test_no_rule_matches_plain_user_text() {
        let rules = default_rules();
        let line = "Bob: the printer is making a grinding noise";

        assert!(rules.iter().all(|r| !r.matches(line)));
    }
}
