//! User-facing text.
//!
//! Every string the program writes to stdout, other than table lines,
//! lives here. Output is compared byte for byte, so these must not change.

/// Printed once at startup.
pub const WELCOME: &str = "-- Bienvenido a las Tablas de Multiplicar.";

/// Asked before every attempt to read a base.
pub const NUMBER_PROMPT: &str = "¿De qué número desea las tablas?: ";

/// Printed after a line that is not an integer.
pub const NOT_AN_INTEGER: &str = "❌ Introduce un número entero.";

/// Closes every table.
pub const TABLE_END: &str = "Fin de la tabla.";

/// Asked after each interactive table.
pub const CONTINUE_PROMPT: &str = "¿Desea imprimir otra tabla? (s/n): ";

/// Printed between the interactive session and the reference tables.
pub const FAREWELL: &str =
    "Ha sido un placer 🤗, aquí tienes las tablas del 0-10 por si las quieres revisar.";
