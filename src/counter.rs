//! Stat counter parsing and fixed-step animation.
//!
//! A stat element's initial text is its target (`"50+"`, `"4.80"`). When it
//! first scrolls into view the text counts up from zero in equal increments,
//! one per timer tick, and stops exactly on the target. Stepping is by tick
//! count, not elapsed time, so dropped frames stretch the animation rather
//! than shorten it.
//!
//! Integer stats render every digit: a target of `1e21` counts up to
//! `1000000000000000000000`, not the exponent form a browser would print.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    target: f64,
    increment: f64,
    current: f64,
    decimals: bool,
    plus: bool,
    finished: bool,
}

impl StatCounter {
    /// Parse a stat's display text. `None` when it carries no leading number.
    #[must_use]
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let plus = text.contains('+');
        let decimals = text.contains('.');
        let target = leading_number(&text.replacen('+', "", 1))?;
        Some(Self {
            target,
            increment: target / f64::from(steps.max(1)),
            current: 0.0,
            decimals,
            plus,
            finished: false,
        })
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the text to display.
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.finished = true;
            }
        }
        self.render()
    }

    /// Display text for the current value.
    #[must_use]
    pub fn render(&self) -> String {
        let suffix = if self.plus { "+" } else { "" };
        if self.decimals {
            format!("{:.2}{suffix}", self.current)
        } else {
            format!("{}{suffix}", self.current.floor())
        }
    }
}

/// Longest numeric prefix of `text`, after leading whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// exponent only when digits follow it: `"1,200"` reads as `1`.
fn leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    match s[..end].parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, prefix = &s[..end], "numeric prefix rejected");
            None
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
