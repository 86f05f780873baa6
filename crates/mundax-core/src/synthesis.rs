//! Merges the successful provider replies for one query into a single
//! composite answer. Best-effort text mining over unstructured model output:
//! every extractor returns what it can, and an empty extraction just leaves
//! its section empty. Section order and labels are fixed no matter which
//! providers contributed.

use crate::providers::ProviderId;
use regex::Regex;
use std::sync::OnceLock;

/// One successful provider reply, in response order.
#[derive(Debug, Clone)]
pub struct Solution {
    pub provider: ProviderId,
    pub content: String,
}

fn analysis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*.*[Aa]nalysis\*\*\s*\n([^*]+)").expect("valid regex"))
}

fn immediate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*.*[Ii]mmediate.*\*\*\s*\n([^*]+)").expect("valid regex"))
}

fn long_term_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*.*[Ll]ong.*[Tt]erm.*\*\*\s*\n([^*]+)").expect("valid regex"))
}

fn numbered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.").expect("valid regex"))
}

fn product_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z]?[a-z]*)*\s+(?:Zeon|Gold|D|Nitrate|Benzoate)")
            .expect("valid regex")
    })
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Longest analysis section across providers. A reply without an analysis
/// heading contributes its first five lines instead.
fn best_analysis(solutions: &[Solution]) -> String {
    let mut best = String::new();
    for sol in solutions {
        let analysis = match analysis_re().captures(&sol.content) {
            Some(caps) => caps[1].to_string(),
            None => sol.content.lines().take(5).collect::<Vec<_>>().join("\n"),
        };
        if analysis.len() > best.len() {
            best = analysis;
        }
    }
    best
}

/// Up to 500 chars after an "immediate" heading, else up to five list lines.
/// `None` when the reply has neither.
fn immediate_actions(content: &str) -> Option<String> {
    if let Some(caps) = immediate_re().captures(content) {
        return Some(truncate_chars(&caps[1], 500));
    }
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| line.contains('•') || line.contains('-'))
        .take(5)
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Bullet and numbered lines from every reply, deduplicated in first-seen
/// order. Ten lines considered per provider, eight kept overall.
fn consolidate_plans(solutions: &[Solution]) -> String {
    let mut steps: Vec<String> = Vec::new();
    for sol in solutions {
        let lines = sol
            .content
            .lines()
            .filter(|line| {
                (line.contains('•') || line.contains('-') || numbered_re().is_match(line))
                    && line.chars().count() > 10
            })
            .take(10);
        for line in lines {
            if !steps.iter().any(|s| s == line) {
                steps.push(line.to_string());
            }
        }
    }
    steps.truncate(8);
    steps.join("\n")
}

/// Capitalized product names (fixed suffix set), deduplicated, at most six.
fn combine_products(solutions: &[Solution]) -> String {
    let mut products: Vec<String> = Vec::new();
    for sol in solutions {
        for m in product_re().find_iter(&sol.content) {
            let name = m.as_str();
            if name.chars().count() > 5 && !products.iter().any(|p| p == name) {
                products.push(name.to_string());
            }
        }
    }
    products.truncate(6);
    products
        .iter()
        .map(|p| format!("• {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Up to 200 chars after a "long term" heading, if present.
fn long_term(content: &str) -> Option<String> {
    long_term_re()
        .captures(content)
        .map(|caps| truncate_chars(&caps[1], 200))
}

/// Assemble the composite answer from at least one successful reply.
pub fn synthesize(solutions: &[Solution]) -> String {
    let mut out = String::from("**🚀 MUNDAX AI REVOLUTIONARY SOLUTION**\n\n");

    out.push_str(&format!(
        "**🎯 Problem Analysis**\n{}\n\n",
        best_analysis(solutions)
    ));

    out.push_str("**🚀 Immediate Solutions**\n");
    for sol in solutions {
        if let Some(actions) = immediate_actions(&sol.content) {
            out.push_str(&format!(
                "From {}:\n{}\n",
                sol.provider.as_str().to_uppercase(),
                actions
            ));
        }
    }

    out.push_str("**📋 Comprehensive Action Plan**\n");
    out.push_str(&consolidate_plans(solutions));
    out.push('\n');

    out.push_str("**💊 Expert-Recommended Products**\n");
    out.push_str(&combine_products(solutions));
    out.push('\n');

    out.push_str("**🌱 Long-term Farm Transformation**\n");
    for sol in solutions {
        if let Some(strategy) = long_term(&sol.content) {
            out.push_str(&format!("• {strategy}\n"));
        }
    }

    out.push_str("**📞 Zimbabwe Support Network**\n");
    out.push_str("• Local Agro-Dealers: Stock recommended products\n");
    out.push_str("• Agriculture Extension Officers: District offices\n");
    out.push_str("• Emergency Helpline: Contact local agriculture office\n\n");

    out.push_str("**🔬 Multi-AI Intelligence**\n");
    out.push_str("*This solution synthesizes expert knowledge from:*\n");
    for sol in solutions {
        out.push_str(&format!("• {} AI\n", sol.provider.as_str().to_uppercase()));
    }

    out.push_str("\n---\n*🌱 Transforming Zimbabwean Farming Through AI Innovation • MundaX Revolution*");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sol(provider: ProviderId, content: &str) -> Solution {
        Solution {
            provider,
            content: content.to_string(),
        }
    }

    #[test]
    fn footer_names_contributors_in_response_order() {
        let solutions = vec![
            sol(ProviderId::Deepseek, "short reply"),
            sol(ProviderId::Google, "another reply"),
        ];
        let out = synthesize(&solutions);

        let footer_at = out.find("*This solution synthesizes expert knowledge from:*").unwrap();
        let footer = &out[footer_at..];
        assert!(footer.contains("• DEEPSEEK AI\n• GOOGLE AI\n"));
        assert!(!footer.contains("OPENAI"));
        assert!(footer.find("DEEPSEEK").unwrap() < footer.find("GOOGLE").unwrap());
    }

    #[test]
    fn analysis_prefers_longest_headed_section() {
        let solutions = vec![
            sol(
                ProviderId::Deepseek,
                "**🎯 Problem Analysis**\nShort take.\n\n**Next**\nx",
            ),
            sol(
                ProviderId::Openai,
                "**🎯 Problem Analysis**\nA much longer and more detailed diagnosis of the field problem.\n\n**Next**\nx",
            ),
        ];
        let out = synthesize(&solutions);
        assert!(out.contains("more detailed diagnosis"));
        assert!(!out.contains("Short take"));
    }

    #[test]
    fn analysis_falls_back_to_first_five_lines() {
        let content = "line one\nline two\nline three\nline four\nline five\nline six";
        let solutions = vec![sol(ProviderId::Google, content)];
        let out = synthesize(&solutions);
        assert!(out.contains("line five"));
        assert!(!out.contains("line six"));
    }

    #[test]
    fn immediate_section_skips_providers_with_nothing_to_say() {
        let solutions = vec![
            sol(
                ProviderId::Deepseek,
                "**🚀 Immediate Solutions**\nSpray now.\n\n**More**\nx",
            ),
            sol(ProviderId::Openai, "no structure at all"),
        ];
        let out = synthesize(&solutions);
        assert!(out.contains("From DEEPSEEK:\nSpray now."));
        assert!(!out.contains("From OPENAI:"));
    }

    #[test]
    fn plan_deduplicates_across_providers_and_caps_at_eight() {
        let shared = "• Apply nitrogen fertilizer now";
        let a = format!(
            "{shared}\n• Check the soil pH today\n1. Scout the field each morning\n"
        );
        let b = format!(
            "{shared}\n• Remove infected plants quickly\n2. Repeat the spray after a week\n\
             • Use certified seed varieties\n• Install pheromone traps soon\n\
             • Rotate with legumes next season\n• Mulch between the rows heavily\n\
             • Keep records of every spray\n"
        );
        let solutions = vec![sol(ProviderId::Deepseek, &a), sol(ProviderId::Openai, &b)];
        let out = synthesize(&solutions);

        let plan_at = out.find("**📋 Comprehensive Action Plan**").unwrap();
        let products_at = out.find("**💊 Expert-Recommended Products**").unwrap();
        let plan = &out[plan_at..products_at];

        assert_eq!(plan.matches(shared).count(), 1);
        let step_lines = plan
            .lines()
            .filter(|l| l.contains('•') || l.starts_with(char::is_numeric))
            .count();
        assert_eq!(step_lines, 8);
    }

    #[test]
    fn consolidation_is_idempotent_on_deduplicated_input() {
        let content = "• Step one is quite long\n• Step two is also long\n1. Step three here now";
        let solutions = vec![
            sol(ProviderId::Deepseek, content),
            sol(ProviderId::Openai, content),
        ];
        let first = consolidate_plans(&solutions);
        let second = consolidate_plans(&solutions);
        assert_eq!(first, second);
        assert_eq!(first.matches("Step one").count(), 1);
    }

    #[test]
    fn products_capped_at_six_without_duplicates() {
        let content = "Buy Karate Zeon.\nBuy Karate Zeon.\nGet Compound D.\nGet Super Gold.\n\
                       Try Ammonium Nitrate.\nTry Calcium Nitrate.\nTry Potassium Nitrate.\n\
                       Try Emamectin Benzoate.";
        let solutions = vec![
            sol(ProviderId::Deepseek, content),
            sol(ProviderId::Openai, content),
        ];
        let listing = combine_products(&solutions);
        let entries: Vec<&str> = listing.lines().collect();
        assert!(entries.len() <= 6, "got {} entries", entries.len());
        assert_eq!(listing.matches("Karate Zeon").count(), 1);
    }

    #[test]
    fn long_term_is_truncated_to_200_chars() {
        let body = "x".repeat(400);
        let content = format!("**🌱 Long-term Prevention**\n{body}");
        let solutions = vec![sol(ProviderId::Google, &content)];
        let out = synthesize(&solutions);

        let section_at = out.find("**🌱 Long-term Farm Transformation**").unwrap();
        let network_at = out.find("**📞 Zimbabwe Support Network**").unwrap();
        let section = &out[section_at..network_at];
        assert!(section.contains(&"x".repeat(200)));
        assert!(!section.contains(&"x".repeat(201)));
    }

    #[test]
    fn empty_extractions_still_emit_labeled_sections() {
        let solutions = vec![sol(ProviderId::Openai, "nothing structured here")];
        let out = synthesize(&solutions);
        assert!(out.contains("**📋 Comprehensive Action Plan**"));
        assert!(out.contains("**💊 Expert-Recommended Products**"));
        assert!(out.contains("**🌱 Long-term Farm Transformation**"));
    }
}
