use leptos::prelude::*;

/// Whether the current selection is still one of the dropdown's options.
fn selection_still_listed(selected: Option<&str>, names: &[String]) -> bool {
	selected.is_none_or(|name| names.iter().any(|n| n == name))
}

/// Search box plus drug dropdown.
///
/// The dropdown is repopulated from `names` as the query narrows; choosing the
/// leading "-- none --" entry clears the selection, and a selection that the
/// query filters out of the options resets to none so the dropdown and the
/// details panel never disagree.
#[component]
pub fn Sidebar(
	/// Live search text.
	query: RwSignal<String>,
	/// Currently selected drug name, if any.
	selected: RwSignal<Option<String>>,
	/// Names matching the current query, in dataset order.
	#[prop(into)] names: Signal<Vec<String>>,
) -> impl IntoView {
	Effect::new(move |_| {
		let current = selected.get();
		if !selection_still_listed(current.as_deref(), &names.get()) {
			selected.set(None);
		}
	});

	view! {
		<div class="sidebar">
			<h2>"search / select drug"</h2>
			<input
				type="text"
				placeholder="search by name"
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<select on:change=move |ev| {
				let value = event_target_value(&ev);
				selected.set(if value.is_empty() { None } else { Some(value) });
			}>
				<option value="">"-- none --"</option>
				{move || {
					let current = selected.get();
					names
						.get()
						.into_iter()
						.map(|name| {
							let is_current = current.as_deref() == Some(name.as_str());
							view! {
								<option value=name.clone() selected=is_current>
									{name.clone()}
								</option>
							}
						})
						.collect_view()
				}}
			</select>
			<hr />
			<p class="data-source">"data source: bundled CSVs"</p>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(list: &[&str]) -> Vec<String> {
		list.iter().map(|n| n.to_string()).collect()
	}

	#[test]
	fn no_selection_is_always_listed() {
		assert!(selection_still_listed(None, &names(&["Aspirin"])));
		assert!(selection_still_listed(None, &[]));
	}

	#[test]
	fn surviving_selection_stays() {
		assert!(selection_still_listed(
			Some("Warfarin"),
			&names(&["Aspirin", "Warfarin"])
		));
	}

	#[test]
	fn filtered_out_selection_resets() {
		// narrowing a query to "asp" drops Warfarin from the options, so the
		// stale selection must not survive
		assert!(!selection_still_listed(
			Some("Warfarin"),
			&names(&["Aspirin"])
		));
	}
}
