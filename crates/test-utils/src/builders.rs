use taskwave::model::{Task, TaskStatus};

/// Builder for `Task` to simplify test setup.
///
/// Defaults: pending, no dependencies, not parallel-eligible, one worker,
/// no assignee, name derived from the id.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task {
                id: id.to_string(),
                name: format!("Task {id}"),
                status: TaskStatus::Pending,
                dependencies: vec![],
                multi_dev_ok: false,
                is_parallelizable: false,
                parallel_reason: None,
                user_count: 1,
                agent: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn completed(self) -> Self {
        self.status(TaskStatus::Completed)
    }

    pub fn in_progress(self) -> Self {
        self.status(TaskStatus::InProgress)
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn multi_dev_ok(mut self, val: bool) -> Self {
        self.task.multi_dev_ok = val;
        self
    }

    pub fn parallelizable(mut self, val: bool) -> Self {
        self.task.is_parallelizable = val;
        self
    }

    pub fn parallel_reason(mut self, reason: &str) -> Self {
        self.task.parallel_reason = Some(reason.to_string());
        self
    }

    pub fn user_count(mut self, count: u32) -> Self {
        self.task.user_count = count;
        self
    }

    pub fn agent(mut self, agent: &str) -> Self {
        self.task.agent = Some(agent.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}
