//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a success line.
    fn success(&mut self, msg: &str);

    /// Render a block of preformatted text on its own lines.
    fn preformatted(&mut self, text: &str);

    /// Render text exactly as given.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered text, for asserting on reports.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput(pub String);

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.0.push_str(&format!("{name}:\n"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.0.push_str(&format!("{key}: {value}\n"));
    }

    fn list_item(&mut self, text: &str) {
        self.0.push_str(&format!("  - {text}\n"));
    }

    fn success(&mut self, msg: &str) {
        self.0.push_str(&format!("✓ {msg}\n"));
    }

    fn preformatted(&mut self, text: &str) {
        self.0.push_str(&format!("{text}\n"));
    }

    fn raw(&mut self, text: &str) {
        self.0.push_str(text);
    }

    fn newline(&mut self) {
        self.0.push('\n');
    }
}
