//! Task dropdown fed from the `/tasks` endpoint.

use leptos::*;

use crate::config::TASK_PLACEHOLDER;
use crate::types::Task;

/// `(value, label)` pairs for the dropdown, placeholder first.
pub fn option_pairs(tasks: &[Task]) -> Vec<(String, String)> {
    let mut pairs = vec![(String::new(), TASK_PLACEHOLDER.to_string())];
    pairs.extend(
        tasks
            .iter()
            .map(|task| (task.id.to_string(), task.title.clone())),
    );
    pairs
}

/// Dropdown bound to the upload form's selected task id.
///
/// While the task list is empty (not yet loaded, or the fetch failed)
/// only the placeholder is shown.
#[component]
pub fn TaskSelect(
    tasks: ReadSignal<Vec<Task>>,
    set_selected_task: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            id="bulk-upload-task"
            on:change=move |ev| set_selected_task.set(event_target_value(&ev))
        >
            <For
                each=move || option_pairs(&tasks.get())
                key=|(value, _)| value.clone()
                children=|(value, label)| {
                    view! { <option value=value>{label}</option> }
                }
            />
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_task_yields_placeholder_plus_one_option() {
        let tasks = vec![Task { id: 1, title: "A".into() }];
        let pairs = option_pairs(&tasks);
        assert_eq!(
            pairs,
            vec![
                (String::new(), TASK_PLACEHOLDER.to_string()),
                ("1".to_string(), "A".to_string()),
            ]
        );
    }

    #[test]
    fn empty_task_list_keeps_only_the_placeholder() {
        let pairs = option_pairs(&[]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "");
    }

    #[test]
    fn task_order_is_preserved() {
        let tasks = vec![
            Task { id: 9, title: "셋째 주".into() },
            Task { id: 2, title: "첫째 주".into() },
        ];
        let labels: Vec<_> = option_pairs(&tasks).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels[1], "셋째 주");
        assert_eq!(labels[2], "첫째 주");
    }
}
