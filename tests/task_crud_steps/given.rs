//! Given steps for task tracking BDD scenarios.

use super::world::{TaskCrudWorld, priority, run_async, scenario_due_date, status};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_tracker::task::{domain::TaskName, services::CreateTaskRequest};

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskCrudWorld) {
    world.last_task = None;
    world.last_page = None;
    world.last_failure = None;
}

#[given(r#"{count:u32} tasks with priority "{level}" exist"#)]
fn many_tasks_exist(
    world: &mut TaskCrudWorld,
    count: u32,
    level: String,
) -> Result<(), eyre::Report> {
    let due_date = scenario_due_date()?;
    let parsed = priority(&level)?;
    for index in 1..=count {
        let name = TaskName::new(format!("Task {index}"))?;
        run_async(
            world
                .manager
                .create(CreateTaskRequest::new(name, due_date, parsed)),
        )
        .wrap_err("seed task for listing scenario")?;
    }
    Ok(())
}

#[given(r#"a task named "{name}" with priority "{level}" exists"#)]
fn task_exists(world: &mut TaskCrudWorld, name: String, level: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(TaskName::new(name)?, scenario_due_date()?, priority(&level)?);
    let created = run_async(world.manager.create(request)).wrap_err("seed task")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a "{state}" task named "{name}" with priority "{level}" exists"#)]
fn task_with_status_exists(
    world: &mut TaskCrudWorld,
    state: String,
    name: String,
    level: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(TaskName::new(name)?, scenario_due_date()?, priority(&level)?)
        .with_status(status(&state)?);
    let created = run_async(world.manager.create(request)).wrap_err("seed task with status")?;
    world.last_task = Some(created);
    Ok(())
}
