//! One-line bar rendering.
//!
//! Produces the same line the in-page bar shows:
//!
//! ```text
//! Your IP: 203.0.113.7 (Netherlands) | Domain: example.com | IP: 93.184.216.34 | Host: - | NS(example.com): a.iana-servers.net, b.iana-servers.net | Server: ECS
//! ```
//!
//! Empty fields render as `-`; a failed lookup renders as `NetBar error: ...`.

use colored::{Color, Colorize};

use crate::lookup::{LookupResponse, LookupResult};

const LABEL: Color = Color::TrueColor { r: 156, g: 163, b: 175 };
const MY_IP: Color = Color::TrueColor { r: 34, g: 211, b: 238 };
const DOMAIN: Color = Color::TrueColor { r: 96, g: 165, b: 250 };
const IP: Color = Color::TrueColor { r: 251, g: 146, b: 60 };
const PTR: Color = Color::TrueColor { r: 192, g: 132, b: 252 };
const NS: Color = Color::TrueColor { r: 134, g: 239, b: 172 };
const SERVER: Color = Color::TrueColor { r: 248, g: 113, b: 113 };
const SEPARATOR: Color = Color::TrueColor { r: 107, g: 114, b: 128 };

struct Painter {
    colorize: bool,
}

impl Painter {
    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.colorize {
            return text.to_string();
        }
        let colored = text.color(color);
        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }

    fn field(&self, label: &str, value: &str, color: Color, bold: bool) -> String {
        format!(
            "{} {}",
            self.paint(label, LABEL, false),
            self.paint(value, color, bold)
        )
    }
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Renders a successful lookup as the bar line.
pub fn render_result(result: &LookupResult, colorize: bool) -> String {
    let p = Painter { colorize };

    let my_ip = match result.my_country.as_deref() {
        Some(country) if !country.is_empty() => {
            format!("{} ({country})", or_dash(result.my_ip.as_deref()))
        }
        _ => or_dash(result.my_ip.as_deref()).to_string(),
    };
    let ns_label = match result.ns_domain.as_deref() {
        Some(domain) => format!("NS({domain}):"),
        None => "NS:".to_string(),
    };
    let ns = if result.ns.is_empty() {
        "-".to_string()
    } else {
        result.ns.join(", ")
    };

    let fields = [
        p.field("Your IP:", &my_ip, MY_IP, true),
        p.field("Domain:", or_dash(Some(&result.domain)), DOMAIN, true),
        p.field("IP:", or_dash(result.ip.as_deref()), IP, true),
        p.field("Host:", or_dash(result.ptr.as_deref()), PTR, false),
        p.field(&ns_label, &ns, NS, false),
        p.field("Server:", or_dash(result.server.as_deref()), SERVER, false),
    ];
    let separator = format!(" {} ", p.paint("|", SEPARATOR, false));
    fields.join(&separator)
}

/// Renders any lookup response: the bar line, or the error in its place.
pub fn render_bar(response: &LookupResponse, colorize: bool) -> String {
    match response {
        LookupResponse::Success(result) => render_result(result, colorize),
        LookupResponse::Failure { message } => Painter { colorize }.paint(
            &format!("NetBar error: {message}"),
            SERVER,
            false,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_result() -> LookupResult {
        LookupResult {
            domain: "sub.example.com".to_string(),
            ip: Some("93.184.216.34".to_string()),
            ns: vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()],
            ns_domain: Some("example.com".to_string()),
            ptr: Some("example.org".to_string()),
            server: Some("ECS (dcb/7F83)".to_string()),
            my_ip: Some("203.0.113.7".to_string()),
            my_country: Some("Netherlands".to_string()),
        }
    }

    #[test]
    fn test_render_full_result() {
        assert_eq!(
            render_result(&full_result(), false),
            "Your IP: 203.0.113.7 (Netherlands) | Domain: sub.example.com | IP: 93.184.216.34 \
             | Host: example.org | NS(example.com): ns1.example.com, ns2.example.com \
             | Server: ECS (dcb/7F83)"
        );
    }

    #[test]
    fn test_render_missing_fields_as_dash() {
        let result = LookupResult {
            domain: "intranet.local".to_string(),
            ip: None,
            ns: Vec::new(),
            ns_domain: None,
            ptr: None,
            server: Some("-".to_string()),
            my_ip: None,
            my_country: None,
        };
        assert_eq!(
            render_result(&result, false),
            "Your IP: - | Domain: intranet.local | IP: - | Host: - | NS: - | Server: -"
        );
    }

    #[test]
    fn test_render_ip_without_country() {
        let result = LookupResult {
            my_country: None,
            ..full_result()
        };
        assert!(render_result(&result, false).starts_with("Your IP: 203.0.113.7 | "));
    }

    #[test]
    fn test_render_failure() {
        let response = LookupResponse::Failure {
            message: "DoH failed: 503".to_string(),
        };
        assert_eq!(render_bar(&response, false), "NetBar error: DoH failed: 503");
    }

    #[test]
    fn test_render_success_matches_result() {
        let response = LookupResponse::Success(full_result());
        assert_eq!(
            render_bar(&response, false),
            render_result(&full_result(), false)
        );
    }
}
