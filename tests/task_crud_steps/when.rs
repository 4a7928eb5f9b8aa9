//! When steps for task tracking BDD scenarios.

use super::world::{TaskCrudWorld, priority, run_async, scenario_due_date, status};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use task_tracker::task::{
    domain::{PageRequest, TaskFilter, TaskId, TaskName, TaskPatch},
    services::CreateTaskRequest,
};

#[when(r#"a task named "{name}" with priority "{level}" is created"#)]
fn create_task(world: &mut TaskCrudWorld, name: String, level: String) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(TaskName::new(name)?, scenario_due_date()?, priority(&level)?);
    let created = run_async(world.manager.create(request)).wrap_err("create task")?;
    world.last_task = Some(created);
    Ok(())
}

#[when("page {page:u32} is listed with limit {limit:u32}")]
fn list_page(world: &mut TaskCrudWorld, page: u32, limit: u32) -> Result<(), eyre::Report> {
    let window = PageRequest::new(Some(page), Some(limit))?;
    let result = run_async(world.manager.list(TaskFilter::new(), window)).wrap_err("list tasks")?;
    world.last_page = Some((window, result));
    Ok(())
}

#[when(r#"tasks with status "{state}" and priority "{level}" are listed"#)]
fn list_filtered(world: &mut TaskCrudWorld, state: String, level: String) -> Result<(), eyre::Report> {
    let filter = TaskFilter::new()
        .with_status(status(&state)?)
        .with_priority(priority(&level)?);
    let window = PageRequest::default();
    let result = run_async(world.manager.list(filter, window)).wrap_err("list filtered tasks")?;
    world.last_page = Some((window, result));
    Ok(())
}

#[when(r#"the task priority is changed to "{level}""#)]
fn change_priority(world: &mut TaskCrudWorld, level: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let patch = TaskPatch::new().with_priority(priority(&level)?);
    let updated = run_async(world.manager.update(id, patch)).wrap_err("update task priority")?;
    world.last_task = Some(updated);
    Ok(())
}

#[when(r#"task {id:i64} is updated to status "{state}""#)]
fn update_by_id(world: &mut TaskCrudWorld, id: i64, state: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id)?;
    let patch = TaskPatch::new().with_status(status(&state)?);
    match run_async(world.manager.update(task_id, patch)) {
        Ok(updated) => world.last_task = Some(updated),
        Err(err) => world.last_failure = Some(err),
    }
    Ok(())
}

#[when("the task is removed")]
fn remove_task(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    run_async(world.manager.remove(id)).wrap_err("remove task")?;
    Ok(())
}
