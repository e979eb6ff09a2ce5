//! elz_printer: Node model to elz source text.
//!
//! Renders expressions, signatures and bindings back into elz surface
//! syntax. The output is used in trace logs and assertion messages, and a
//! printed string literal can be un-quoted back to the same value.

use elz_ast::*;

/// Options for the printer.
pub struct PrinterOptions {
    /// Separator written between signature components.
    pub arrow: String,
    /// Newline string.
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            arrow: " -> ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

/// The printer converts nodes to text.
pub struct Printer {
    output: String,
    options: PrinterOptions,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Print a binding, preceded by its signature line when it has one.
    pub fn print_binding(&mut self, binding: &Binding) -> String {
        self.output.clear();
        if let Some(signature) = &binding.signature {
            self.write(&binding.name);
            self.write(" :: ");
            self.write_signature(signature);
            let new_line = self.options.new_line.clone();
            self.write(&new_line);
        }
        if binding.exported {
            self.write("export ");
        }
        self.write(&binding.name);
        for param in &binding.params {
            self.write(" ");
            self.write(param);
        }
        self.write(" = ");
        self.write_expr(&binding.body);
        std::mem::take(&mut self.output)
    }

    pub fn print_signature(&mut self, signature: &[Type]) -> String {
        self.output.clear();
        self.write_signature(signature);
        std::mem::take(&mut self.output)
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        self.output.clear();
        self.write_expr(expr);
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Writers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_signature(&mut self, signature: &[Type]) {
        for (i, ty) in signature.iter().enumerate() {
            if i > 0 {
                let arrow = self.options.arrow.clone();
                self.write(&arrow);
            }
            self.write(&ty.to_string());
        }
    }

    fn write_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Int(text) | Expr::Float(text) | Expr::Bool(text) | Expr::Ident(text) => {
                self.write(text)
            }
            Expr::Str(value) => self.write_string_literal(value),
            Expr::List(items) => {
                self.write("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write_expr(item);
                }
                self.write("]");
            }
            Expr::Binary(node) => self.write_binary(node),
            Expr::Call(node) => {
                self.write(&node.access_path);
                self.write("(");
                for (i, arg) in node.args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    if let Some(label) = &arg.label {
                        self.write(label);
                        self.write(": ");
                    }
                    self.write_expr(&arg.value);
                }
                self.write(")");
            }
        }
    }

    fn write_binary(&mut self, node: &BinaryExpr) {
        let prec = precedence(&node.op);
        self.write_operand(&node.left, prec, false);
        self.write(" ");
        self.write(&node.op);
        self.write(" ");
        self.write_operand(&node.right, prec, true);
    }

    /// Operators are left-associative, so a right operand of equal
    /// precedence needs parentheses to keep its grouping.
    fn write_operand(&mut self, operand: &Expr, parent_prec: u8, is_right: bool) {
        let needs_parens = match operand {
            Expr::Binary(child) => {
                let child_prec = precedence(&child.op);
                child_prec < parent_prec || (is_right && child_prec == parent_prec) || child_prec == 0
            }
            _ => false,
        };
        if needs_parens {
            self.write("(");
            self.write_expr(operand);
            self.write(")");
        } else {
            self.write_expr(operand);
        }
    }

    fn write_string_literal(&mut self, value: &str) {
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                    self.output.push_str(&format!("\\x{:02x}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Binding strength of an operator token; unknown operators bind loosest.
fn precedence(op: &str) -> u8 {
    match op {
        "*" | "/" | "%" => 2,
        "+" | "-" => 1,
        _ => 0,
    }
}

/// Print an expression with default options.
pub fn print_expr(expr: &Expr) -> String {
    Printer::new().print_expr(expr)
}

/// Print a signature with default options, e.g. `int -> int -> int`.
pub fn print_signature(signature: &[Type]) -> String {
    Printer::new().print_signature(signature)
}

/// Print a binding with default options.
pub fn print_binding(binding: &Binding) -> String {
    Printer::new().print_binding(binding)
}
