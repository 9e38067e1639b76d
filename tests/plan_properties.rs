use std::collections::{BTreeSet, HashMap, HashSet};

use proptest::prelude::*;

use taskwave::dag::{analyze_readiness, generate_plan, status_snapshot};
use taskwave::errors::PlanError;
use taskwave::model::{Task, TaskStatus};
use taskwave::plan_all;
use taskwave_test_utils::builders::TaskBuilder;

// Strategy to generate a valid task list with mixed statuses and hints.
// Acyclicity is ensured by only allowing task N to depend on tasks 0..N-1.
fn task_list_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Task>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );
        let statuses = proptest::collection::vec(0..3usize, num_tasks);
        let eligible = proptest::collection::vec(any::<bool>(), num_tasks);

        (deps, statuses, eligible).prop_map(|(raw_deps, statuses, eligible)| {
            let mut tasks = Vec::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let mut builder = TaskBuilder::new(&format!("task_{i}"));

                // Sanitize dependencies: only allow deps < i.
                let mut valid_deps = BTreeSet::new();
                for dep_idx in potential_deps {
                    if i > 0 {
                        valid_deps.insert(dep_idx % i);
                    }
                }
                for dep_idx in valid_deps {
                    builder = builder.depends_on(&format!("task_{dep_idx}"));
                }

                builder = builder.status(match statuses[i] {
                    0 => TaskStatus::Pending,
                    1 => TaskStatus::InProgress,
                    _ => TaskStatus::Completed,
                });
                builder = builder.multi_dev_ok(eligible[i]);

                tasks.push(builder.build());
            }
            tasks
        })
    })
}

proptest! {
    // A task is reported runnable iff it is pending and every dependency is
    // completed.
    #[test]
    fn readiness_matches_its_definition(tasks in task_list_strategy(12)) {
        let status = status_snapshot(&tasks);
        let runnable = analyze_readiness(&tasks, &status);

        let by_id: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.id.as_str(), t)).collect();

        for planned in &runnable.tasks {
            let task = by_id[planned.id.as_str()];
            prop_assert_eq!(task.status, TaskStatus::Pending);
            for dep in &task.dependencies {
                prop_assert_eq!(by_id[dep.as_str()].status, TaskStatus::Completed);
            }
        }

        let any_ready = tasks.iter().any(|t| {
            t.status == TaskStatus::Pending
                && t.dependencies
                    .iter()
                    .all(|d| by_id[d.as_str()].status == TaskStatus::Completed)
        });
        prop_assert_eq!(runnable.tasks.is_empty(), !any_ready);
    }

    // Every initially pending task lands in exactly one wave; nothing else
    // is ever scheduled. Waves carry 1-based ordinals in order.
    #[test]
    fn waves_cover_pending_tasks_exactly_once(tasks in task_list_strategy(12)) {
        let waves = generate_plan(&tasks).expect("acyclic input must plan");

        let mut seen: HashSet<String> = HashSet::new();
        for (i, wave) in waves.iter().enumerate() {
            prop_assert_eq!(wave.index, i + 1);
            for task in &wave.tasks {
                prop_assert!(seen.insert(task.id.clone()), "task {} planned twice", task.id);
            }
        }

        let pending: HashSet<String> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .map(|t| t.id.clone())
            .collect();
        prop_assert_eq!(seen, pending);
    }

    // Every dependency of a planned task is satisfied by a strictly earlier
    // wave or was already completed (or running) before planning began.
    #[test]
    fn waves_respect_causal_order(tasks in task_list_strategy(12)) {
        let waves = generate_plan(&tasks).expect("acyclic input must plan");

        let mut wave_of: HashMap<String, usize> = HashMap::new();
        for wave in &waves {
            for task in &wave.tasks {
                wave_of.insert(task.id.clone(), wave.index);
            }
        }

        let by_id: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.id.as_str(), t)).collect();

        for wave in &waves {
            for task in &wave.tasks {
                for dep in &by_id[task.id.as_str()].dependencies {
                    match wave_of.get(dep.as_str()) {
                        Some(dep_wave) => prop_assert!(*dep_wave < wave.index),
                        None => prop_assert_ne!(
                            by_id[dep.as_str()].status,
                            TaskStatus::Pending
                        ),
                    }
                }
            }
        }
    }

    // The same unmodified input yields byte-identical formatted output.
    #[test]
    fn plan_text_is_deterministic(tasks in task_list_strategy(10)) {
        let first = plan_all(&tasks).expect("acyclic input must plan");
        let second = plan_all(&tasks).expect("acyclic input must plan");
        prop_assert_eq!(first.text, second.text);
    }

    // A dependency ring of any length is refused outright.
    #[test]
    fn cycles_are_rejected(len in 2..6usize) {
        let mut tasks = Vec::new();
        for i in 0..len {
            let next = (i + 1) % len;
            tasks.push(
                TaskBuilder::new(&format!("task_{i}"))
                    .depends_on(&format!("task_{next}"))
                    .build(),
            );
        }

        match generate_plan(&tasks) {
            Err(PlanError::CyclicDependency { cycle_ids }) => {
                prop_assert_eq!(cycle_ids.len(), len);
            }
            other => prop_assert!(false, "expected CyclicDependency, got {:?}", other),
        }
    }
}
