//! Common messages shared by lexfsm commands.

// ============================================================================
// Output Messages
// ============================================================================

/// Standard user-facing message templates.
///
/// These constants keep stdout wording identical across commands and tests.
pub mod output_messages {
    /// Prompt shown when no input path is given on the command line.
    pub const INPUT_PROMPT: &str = "Enter the input file name: ";

    /// Printed after the report has been written.
    pub const OUTPUT_WRITTEN: &str = "Output written to:";

    /// Printed after a configuration file has been saved.
    pub const CONFIG_WRITTEN: &str = "Configuration written to:";
}
