#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFoundWithId(i64),
    TaskTitleRequired,
    TaskCourseRequired,
    NoUpcomingTasks,
    NoCompletedTasks,
    UpcomingTasksHeader,
    CompletedTasksHeader,
    ConfirmDeleteTask(String),
    EditingTask(String),
    InvalidDueDate(String),
    InvalidDueTime(String),

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskCourse,
    PromptTaskType,
    PromptCustomTypeName,
    PromptDueDate,
    PromptDueTime,
    PromptNotes,

    // === CUSTOM TYPE MESSAGES ===
    TypeCreated(String),
    TypeDeleted(String),
    TypeAlreadyExists(String),
    TypeNotFound(String),
    NoCustomTypes,
    TypeListHeader,
    ConfirmDeleteType(String),
    PromptTypeName,
    PromptTypeColor,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleReminders,
    ConfigModuleGemini,
    PromptSelectModules,
    PromptReminderPollInterval,
    PromptGeminiModel,
    PromptGeminiApiKey,

    // === REMINDER MESSAGES ===
    ReminderDueToday { title: String, course: String },
    ReminderDueTomorrow { title: String, course: String },
    ReminderDeliveryFailed(String),
    RemindersScheduled(usize),

    // === WATCHER MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherRunning(u64),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),
    WatcherFailedToStopExisting(String),
    WatcherFailedToStop(u32),
    WatcherExitedNormally,
    WatcherShuttingDown,
    WatcherError(String),
    WatcherTaskPanicked(String),
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    InvalidPidFileContent,
    FailedToGetCurrentExecutable,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
    DaemonModeNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === AI ASSISTANT MESSAGES ===
    AiNotConfigured,
    AiRequestFailed(String),
    AiEmptyReply,
    AiNoTasksForContext,
    AiReplyHeader,
}
