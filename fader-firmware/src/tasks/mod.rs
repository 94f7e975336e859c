// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels
// (Fader → Touch-Feedback via Broadcast, Touch-Feedback → Fader via Command-Channel).

pub mod fader_control;
pub mod touch_feedback;

// Re-export Tasks für einfachen Import
pub use fader_control::fader_control_task;
pub use touch_feedback::touch_feedback_task;
