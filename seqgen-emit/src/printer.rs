//! Rendering of syntax fragments to TypeScript source text.

/// Types that can be rendered to TypeScript source text.
pub trait Render {
    /// Write this fragment into the printer.
    fn render(&self, out: &mut Printer);

    /// Render this fragment to a string through a fresh printer.
    fn build(&self) -> String {
        Printer::print(self)
    }
}

/// Throwaway rendering context for one print call.
///
/// The printer owns an append-only buffer and always emits line-feed
/// newlines. Rendering reads nothing outside the fragment being printed,
/// so independent threads can print concurrently without coordination.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a single fragment to source text.
    pub fn print<N>(node: &N) -> String
    where
        N: Render + ?Sized,
    {
        let mut printer = Printer::new();
        node.render(&mut printer);
        printer.finish()
    }

    /// Render several statement-level fragments, one per line.
    pub fn print_all(nodes: &[&dyn Render]) -> String {
        let mut printer = Printer::new();
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                printer.out.push('\n');
            }
            node.render(&mut printer);
        }
        printer.finish()
    }

    /// Append raw text to the output buffer.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Append a double-quoted string literal, escaping the characters the
    /// TypeScript printer escapes.
    pub fn string_literal(&mut self, value: &str) -> &mut Self {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                _ => self.out.push(ch),
            }
        }
        self.out.push('"');
        self
    }

    /// Consume the printer and return the rendered text.
    pub fn finish(self) -> String {
        self.out
    }
}
