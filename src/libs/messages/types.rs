#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(String),
    TaskAlreadyCompleted(String),
    TaskDeleted(String),
    TaskDeleteCancelled,
    TaskRejected(String),
    TasksHeader,
    TasksCategoryHeader(String),
    NoTasksFound,
    NoTasksInCategory(String),
    ConfirmDeleteTask(String),

    // === STORE MESSAGES ===
    StoreLoadRecovered(String),
    StoreUnavailable(String),
    StoreRecordSkipped { position: usize, reason: String },
    StoreWorkerFailed(String),
    TasksRolledOver(usize),

    // === ALARM MESSAGES ===
    AlarmScannerStarted(u64), // poll interval in seconds
    AlarmDue { title: String, due: String },
    AlarmRescheduled { title: String, next: String },
    AlarmTaskFailed { title: String, error: String },
    AlarmScanFailed(String),
    AlarmScanFinished { fired: usize, rescheduled: usize },
    NotifierFailed(String),
    NotificationTitle,
    NotificationBody(String), // task title

    // === UPCOMING MESSAGES ===
    UpcomingHeader(i64), // window in minutes
    NoUpcomingTasks(i64),

    // === REPORT MESSAGES ===
    ReportHeader(String), // period
    ReportCompletion { completed: usize, total: usize, rate: f64 },
    ReportNoTasksInPeriod,
    StatsHeader,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleAlarm,
    PromptPollInterval,
    PollIntervalOutOfRange(u64, u64), // min, max seconds
    PromptNotificationTimeout,
    PromptUpcomingWindow,
    PromptDefaultOwner,

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptCategory,
    PromptDueDate,
    PromptDueTime,
    PromptRecurring,
    PromptPriority,
    PromptTaskNumberComplete,
    PromptTaskNumberDelete,
    PromptCategoryFilter,
    PromptReportPeriod,

    // === MENU MESSAGES ===
    MenuWelcome,
    MenuPrompt,
    MenuViewTasks,
    MenuAddTask,
    MenuCompleteTask,
    MenuDeleteTask,
    MenuCategoryView,
    MenuReport,
    MenuUpcoming,
    MenuExit,
    MenuGoodbye,

    // === WATCHER/DAEMON MESSAGES ===
    WatcherStarted(u32), // PID
    WatcherStopped(u32), // PID
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),     // PID
    WatcherFailedToStopExisting(String), // error
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    ScannerExitedNormally,
    ScannerShuttingDown,
    ScannerError(String),
    ScannerTaskPanicked(String),
    DaemonModeNotSupported,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    InvalidPidFileContent,
    FailedToOpenProcess(u32),      // error code
    FailedToTerminateProcess(u32), // error code
    ProcessTerminationNotSupported,
}
