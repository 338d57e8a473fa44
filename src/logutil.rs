//! Helpers for putting user-typed text and wallet addresses into log lines.

/// Longest user-supplied value echoed into a log line.
const MAX_LOGGED_CHARS: usize = 120;

/// Make typed input (amounts, symbols, quest ids) safe for a single log line.
///
/// Line breaks, tabs and backslashes use their usual escapes, other control
/// characters become `\xNN`, and input past [`MAX_LOGGED_CHARS`] is cut with `…`.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_LOGGED_CHARS) + 4);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_LOGGED_CHARS) {
        push_escaped(&mut out, ch);
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '\\' | '\n' | '\r' | '\t' => out.extend(ch.escape_default()),
        c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
        c => out.push(c),
    }
}

/// Abbreviate a wallet address as `first8...last8`. Short addresses pass through.
pub fn short_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 16 {
        return addr.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}
