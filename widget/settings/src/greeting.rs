//! Greeting computation.

use crate::context::ApplyContext;
use crate::defaults::{
    DEFAULT_AFTERNOON_GREETING, DEFAULT_EVENING_GREETING, DEFAULT_MORNING_GREETING,
};
use crate::schema::{GreetingMode, GreetingSettings};

/// Compute the greeting for the current page view.
///
/// `time` picks a canned string by local hour; `page` takes the first rule
/// whose substring matches the page path, empty if none match; `both`
/// tries `page` first and falls back to `time`.
pub fn resolve(greeting: &GreetingSettings, ctx: &ApplyContext) -> String {
    match greeting.mode {
        None => String::new(),
        Some(GreetingMode::Time) => by_time(greeting, ctx.local_hour),
        Some(GreetingMode::Page) => by_page(greeting, &ctx.page_path),
        Some(GreetingMode::Both) => {
            let page = by_page(greeting, &ctx.page_path);
            if page.is_empty() {
                by_time(greeting, ctx.local_hour)
            } else {
                page
            }
        }
    }
}

fn by_time(greeting: &GreetingSettings, hour: u32) -> String {
    let (configured, fallback) = if hour < 12 {
        (&greeting.morning, DEFAULT_MORNING_GREETING)
    } else if hour < 18 {
        (&greeting.afternoon, DEFAULT_AFTERNOON_GREETING)
    } else {
        (&greeting.evening, DEFAULT_EVENING_GREETING)
    };
    configured.clone().unwrap_or_else(|| fallback.to_string())
}

fn by_page(greeting: &GreetingSettings, path: &str) -> String {
    greeting
        .page_rules
        .iter()
        .find(|rule| path.contains(&rule.path_contains))
        .map(|rule| rule.text.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PageRule;

    fn ctx(hour: u32, path: &str) -> ApplyContext {
        ApplyContext {
            local_hour: hour,
            page_path: path.to_string(),
            ..Default::default()
        }
    }

    fn greeting() -> GreetingSettings {
        GreetingSettings {
            mode: Some(GreetingMode::Time),
            morning: Some("Morning!".into()),
            afternoon: Some("Afternoon!".into()),
            evening: Some("Evening!".into()),
            page_rules: vec![
                PageRule {
                    path_contains: "/pricing".into(),
                    text: "Questions about pricing?".into(),
                },
                PageRule {
                    path_contains: "/".into(),
                    text: "Welcome!".into(),
                },
            ],
        }
    }

    #[test]
    fn time_mode_picks_by_hour() {
        let g = greeting();
        assert_eq!(resolve(&g, &ctx(9, "/")), "Morning!");
        assert_eq!(resolve(&g, &ctx(14, "/")), "Afternoon!");
        assert_eq!(resolve(&g, &ctx(18, "/")), "Evening!");
        assert_eq!(resolve(&g, &ctx(23, "/")), "Evening!");
    }

    #[test]
    fn time_mode_falls_back_to_canned_strings() {
        let g = GreetingSettings {
            mode: Some(GreetingMode::Time),
            ..Default::default()
        };
        assert_eq!(resolve(&g, &ctx(9, "/")), DEFAULT_MORNING_GREETING);
    }

    #[test]
    fn page_mode_first_match_wins() {
        let mut g = greeting();
        g.mode = Some(GreetingMode::Page);
        assert_eq!(
            resolve(&g, &ctx(9, "/pricing/enterprise")),
            "Questions about pricing?"
        );
        assert_eq!(resolve(&g, &ctx(9, "/docs")), "Welcome!");
    }

    #[test]
    fn page_mode_no_match_is_empty() {
        let g = GreetingSettings {
            mode: Some(GreetingMode::Page),
            page_rules: vec![PageRule {
                path_contains: "/pricing".into(),
                text: "Pricing?".into(),
            }],
            ..Default::default()
        };
        assert_eq!(resolve(&g, &ctx(9, "/docs")), "");
    }

    #[test]
    fn both_mode_prefers_page_then_time() {
        let mut g = greeting();
        g.mode = Some(GreetingMode::Both);
        g.page_rules = vec![PageRule {
            path_contains: "/pricing".into(),
            text: "Pricing?".into(),
        }];
        assert_eq!(resolve(&g, &ctx(9, "/pricing")), "Pricing?");
        assert_eq!(resolve(&g, &ctx(9, "/docs")), "Morning!");
    }

    #[test]
    fn no_mode_means_no_greeting() {
        assert_eq!(resolve(&GreetingSettings::default(), &ctx(9, "/")), "");
    }
}
