//! Display implementation for tsk application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. All user-facing strings live here so wording stays
//! consistent and can be adjusted in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskTitleRequired => "Please enter a task title".to_string(),
            Message::TaskCourseRequired => "Please enter a course name".to_string(),
            Message::NoUpcomingTasks => "No upcoming tasks".to_string(),
            Message::NoCompletedTasks => "No completed tasks".to_string(),
            Message::UpcomingTasksHeader => "📚 Upcoming tasks".to_string(),
            Message::CompletedTasksHeader => "🎉 Completed tasks".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::InvalidDueDate(input) => format!("Invalid due date '{}', expected DD-MM-YYYY", input),
            Message::InvalidDueTime(input) => format!("Invalid due time '{}', expected HH:MM, falling back to 00:00", input),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskCourse => "Course name".to_string(),
            Message::PromptTaskType => "Task type".to_string(),
            Message::PromptCustomTypeName => "Custom type name".to_string(),
            Message::PromptDueDate => "Due date (DD-MM-YYYY)".to_string(),
            Message::PromptDueTime => "Due time (HH:MM)".to_string(),
            Message::PromptNotes => "Notes (optional)".to_string(),

            // === CUSTOM TYPE MESSAGES ===
            Message::TypeCreated(name) => format!("Task type '{}' created", name),
            Message::TypeDeleted(name) => format!("Task type '{}' deleted", name),
            Message::TypeAlreadyExists(name) => format!("Task type '{}' already exists", name),
            Message::TypeNotFound(name) => format!("Task type '{}' not found", name),
            Message::NoCustomTypes => "No custom task types defined".to_string(),
            Message::TypeListHeader => "🏷️ Custom task types".to_string(),
            Message::ConfirmDeleteType(name) => format!("Delete task type '{}'?", name),
            Message::PromptTypeName => "Type name".to_string(),
            Message::PromptTypeColor => "Type color (hex)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigModuleReminders => "Reminder settings".to_string(),
            Message::ConfigModuleGemini => "Gemini AI assistant settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptReminderPollInterval => "Reminder poll interval (seconds)".to_string(),
            Message::PromptGeminiModel => "Gemini model name".to_string(),
            Message::PromptGeminiApiKey => "Enter your Gemini API key".to_string(),

            // === REMINDER MESSAGES ===
            Message::ReminderDueToday { title, course } => format!("🔔 Due today: {} ({})", title, course),
            Message::ReminderDueTomorrow { title, course } => format!("🔔 Due tomorrow: {} ({})", title, course),
            Message::ReminderDeliveryFailed(e) => format!("Failed to deliver reminder: {}", e),
            Message::RemindersScheduled(count) => format!("Scheduled {} reminder(s)", count),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(pid) => format!("Reminder watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Reminder watcher stopped (PID: {})", pid),
            Message::WatcherRunning(interval) => format!("Reminder watcher running, polling every {}s", interval),
            Message::WatcherNotRunning => "Reminder watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Reminder watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher process {}", pid),
            Message::WatcherExitedNormally => "Watcher exited normally".to_string(),
            Message::WatcherShuttingDown => "Watcher shutting down".to_string(),
            Message::WatcherError(e) => format!("Watcher error: {}", e),
            Message::WatcherTaskPanicked(e) => format!("Watcher task panicked: {}", e),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error code: {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error code: {})", code),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === AI ASSISTANT MESSAGES ===
            Message::AiNotConfigured => "Gemini is not configured. Run 'tsk init' to set it up".to_string(),
            Message::AiRequestFailed(e) => format!("AI request failed: {}", e),
            Message::AiEmptyReply => "The assistant returned an empty reply. Please try again".to_string(),
            Message::AiNoTasksForContext => "No tasks currently scheduled.".to_string(),
            Message::AiReplyHeader => "🤖 Study assistant".to_string(),
        };
        write!(f, "{}", text)
    }
}
