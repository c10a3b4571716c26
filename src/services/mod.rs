pub mod change_logs_service;
pub mod epics_service;
pub mod product_ideas_service;
pub mod progress;
pub mod tasks_service;
pub mod users_service;

pub use change_logs_service::ChangeLogsService;
pub use epics_service::EpicsService;
pub use product_ideas_service::ProductIdeasService;
pub use tasks_service::TasksService;
pub use users_service::UsersService;
