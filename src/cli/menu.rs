// ============================================================
// Layer 1 — Menu
// ============================================================
// The fixed text the user sees, and the mapping from what they
// type at "Seleccione una opción:" to what the shell does next.
//
//   "1".."6" → one of the six operations
//   "7"      → leave the calculator
//   anything else → not a menu option

use crate::domain::operation::Operation;

/// Selection that ends the session
pub const EXIT_SELECTION: &str = "7";

pub const TITLE: &str = "        CALCULADORA MEJORADA         ";

const RULE: &str = "=====================================";

/// One line of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Run(Operation),
    Exit,
}

impl MenuOption {
    /// Map the raw selection to a menu option.
    /// The comparison is exact, so " 1" or "01" are not options.
    pub fn parse(selection: &str) -> Option<Self> {
        if selection == EXIT_SELECTION {
            return Some(MenuOption::Exit);
        }

        let operation = match selection {
            "1" => Operation::Add,
            "2" => Operation::Subtract,
            "3" => Operation::Multiply,
            "4" => Operation::Divide,
            "5" => Operation::Power,
            "6" => Operation::SquareRoot,
            _ => return None,
        };
        Some(MenuOption::Run(operation))
    }
}

/// The full menu block printed before every selection.
pub fn render(title: &str) -> String {
    let entries = [
        "1. Suma",
        "2. Resta",
        "3. Multiplicación",
        "4. División",
        "5. Potencia",
        "6. Raíz cuadrada",
        "7. Salir",
    ];

    let mut out = format!("{RULE}\n{title}\n{RULE}\n");
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// What to ask for, in order, before running `operation`.
/// The number of prompts always equals `operation.arity()`.
pub fn operand_prompts(operation: Operation) -> &'static [&'static str] {
    match operation {
        Operation::Add | Operation::Multiply => {
            &["Ingrese el primer número: ", "Ingrese el segundo número: "]
        }
        Operation::Subtract => &["Ingrese el minuendo: ", "Ingrese el sustraendo: "],
        Operation::Divide   => &["Ingrese el dividendo: ", "Ingrese el divisor: "],
        Operation::Power    => &["Ingrese la base: ", "Ingrese el exponente: "],
        Operation::SquareRoot => &["Ingrese el número para calcular la raíz cuadrada: "],
    }
}
