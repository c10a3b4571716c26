use crate::db::enums::TaskStatus;
use crate::db::models::epic::{Epic, EpicWithTasks};
use crate::db::models::product_idea::{ProductIdea, ProductIdeaWithEpics};
use crate::db::models::task::Task;

/// Share of completed tasks as a whole percentage. An empty task list is
/// 0 percent, never a division by zero.
pub fn completion_percentage(completed: i64, total: i64) -> i32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as i32
}

pub fn completed_tasks_count(tasks: &[Task]) -> i64 {
    tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count() as i64
}

pub fn epic_with_tasks(epic: Epic, tasks: Vec<Task>) -> EpicWithTasks {
    let completed = completed_tasks_count(&tasks);
    let total = tasks.len() as i64;
    let total_estimation = tasks.iter().map(|task| task.estimation).sum();

    EpicWithTasks {
        epic,
        completion_percentage: completion_percentage(completed, total),
        total_estimation,
        completed_tasks_count: completed,
        total_tasks_count: total,
        tasks,
    }
}

/// Progress of an idea is measured across every task of every linked epic.
pub fn product_idea_with_epics(
    product_idea: ProductIdea,
    epics: Vec<Epic>,
    tasks: Vec<Task>,
) -> ProductIdeaWithEpics {
    let completed = completed_tasks_count(&tasks);
    let total = tasks.len() as i64;

    ProductIdeaWithEpics {
        product_idea,
        epics,
        implementation_status: completion_percentage(completed, total),
        completed_tasks_count: completed,
        total_tasks_count: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::{CapabilityCategory, EpicStatus, TaskPriority};
    use uuid::Uuid;

    fn task(status: TaskStatus, estimation: i32) -> Task {
        let now = chrono::Utc::now();
        Task {
            id: Uuid::new_v4(),
            epic_id: None,
            assignee_id: None,
            assignee_type: None,
            title: "Task".to_string(),
            description: String::new(),
            estimation,
            priority: TaskPriority::Medium,
            status,
            is_product_idea: false,
            assigned_date: None,
            completion_date: None,
            owner_id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            team_members: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn epic() -> Epic {
        let now = chrono::Utc::now();
        Epic {
            id: Uuid::new_v4(),
            title: "Epic".to_string(),
            description: String::new(),
            estimation: 10,
            capability_category: CapabilityCategory::Backend,
            status: EpicStatus::InProgress,
            created_by: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            team_members: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_completion_percentage() {
        assert_eq!(completion_percentage(2, 4), 50);
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(3, 3), 100);
    }

    #[test]
    fn test_epic_with_tasks_projection() {
        let tasks = vec![
            task(TaskStatus::Done, 3),
            task(TaskStatus::Done, 2),
            task(TaskStatus::InProgress, 5),
            task(TaskStatus::Backlog, 1),
        ];

        let projection = epic_with_tasks(epic(), tasks);
        assert_eq!(projection.completion_percentage, 50);
        assert_eq!(projection.completed_tasks_count, 2);
        assert_eq!(projection.total_tasks_count, 4);
        assert_eq!(projection.total_estimation, 11);
    }

    #[test]
    fn test_epic_without_tasks_projection() {
        let projection = epic_with_tasks(epic(), vec![]);
        assert_eq!(projection.completion_percentage, 0);
        assert_eq!(projection.total_tasks_count, 0);
        assert_eq!(projection.total_estimation, 0);
    }
}
