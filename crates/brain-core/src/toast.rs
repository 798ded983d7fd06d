//! Transient label naming the hemisphere under the pointer.

use crate::constants::TOAST_DURATION_SEC;

/// `left-hemisphere` → `Left Hemisphere`.
pub fn display_name(node_name: &str) -> String {
    node_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Toast text and visibility. Times are seconds on any monotonic timeline
/// (the page's `performance.now()` on the web).
#[derive(Clone, Debug)]
pub struct Toaster {
    text: String,
    hidden: bool,
    hide_at: Option<f64>,
    duration: f64,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(TOAST_DURATION_SEC)
    }
}

impl Toaster {
    pub fn new(duration: f64) -> Self {
        Self {
            text: String::new(),
            hidden: true,
            hide_at: None,
            duration,
        }
    }

    /// Show `Node Name[ msg]` and restart the hide timer.
    pub fn display(&mut self, node_name: &str, msg: Option<&str>, now: f64) -> &str {
        let mut text = display_name(node_name);
        if let Some(m) = msg {
            text.push(' ');
            text.push_str(m);
        }
        self.text = text;
        self.hidden = false;
        self.hide_at = Some(now + self.duration);
        &self.text
    }

    /// Hide once the timer has run out. Returns `true` on the frame the toast
    /// becomes hidden.
    pub fn expire(&mut self, now: f64) -> bool {
        match self.hide_at {
            Some(t) if now >= t => {
                self.hide_at = None;
                let was_visible = !self.hidden;
                self.hidden = true;
                was_visible
            }
            _ => false,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
