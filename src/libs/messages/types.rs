#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome,
    LoginHeader,
    LoginSuccess(String, String), // username, role
    LoggedOut(String),            // username
    ExitGoodbye,
    NoUsersFound,
    AdminMenuHeader,
    UserMenuHeader,
    MenuItem(String, String), // key, label
    MenuLogout,
    MenuExit,
    InvalidMenuChoice,

    // === USER MESSAGES ===
    RegisterHeader,
    UserCreated(String, String), // username, role
    UsersHeader,
    NoUsersRegistered,
    TotalUsers(usize),
    RoleVerificationHeader,
    UserWithoutRole(String),
    RoleAssigned(String, String), // role, username
    AllUsersUpdated,
    AllUsersHaveRoles,
    PasswordMismatch,

    // === TASK MESSAGES ===
    AddTaskHeader,
    TaskCreated { id: u32, title: String, owner: String },
    TasksHeader,
    MyTasksHeader(String),
    CompletedTasksHeader,
    NoTasksFound,
    NoTasksForUser(String),
    NoCompletedTasks,
    TotalTasks(usize),
    InvalidTaskId(String),
    TaskNotInList(String),
    TaskOptionsHeader(String),
    CurrentStatus(String),
    TaskMarked { title: String, complete: bool },
    EditTaskHeader { title: String, owner: String, due: String },
    TaskUpdated(String),
    MarkCompleteHeader,
    TaskMarkedComplete(u32, String),
    ResetTaskHeader,
    TaskReset(u32, String),
    DeleteTaskHeader,
    TaskDeleted(u32, String),

    // === TASK ACTIONS ===
    ActionToggleStatus,
    ActionEditTask,
    ActionBack,
    EditOwnerOnly,
    EditDueDateOnly,
    EditOwnerAndDueDate,
    EditCancel,

    // === REPORT MESSAGES ===
    GeneratingReportsHeader,
    ReportsGenerated(String, String), // task overview path, user overview path
    GeneratingReportsFirst,
    StatisticsHeader,
    TaskOverviewHeader,
    UserOverviewHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleLogging,

    // === PROMPTS ===
    PromptMenuChoice,
    PromptUsername,
    PromptPassword,
    PromptNewUsername,
    PromptNewPassword,
    PromptConfirmPassword,
    PromptSelectRole,
    PromptAssignRole(String),
    PromptAssignee,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptDueDate,
    PromptTaskIdOrReturn,
    PromptTaskAction,
    PromptEditChoice,
    PromptNewOwner,
    PromptNewDueDate,
    PromptSelectAnother,
    PromptMarkCompleteId,
    PromptResetId,
    PromptDeleteKey,
    PromptSelectModules,
    PromptDataDir,
    PromptUsersFile,
    PromptTasksFile,
    PromptTaskOverviewFile,
    PromptUserOverviewFile,
    PromptLogFile,
    PromptLogLevel,
}
