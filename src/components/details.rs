use leptos::either::Either;
use leptos::prelude::*;

use crate::data::DrugDetail;

/// Details panel for the selected drug, or a prompt when nothing is selected.
#[component]
pub fn Details(
	/// Resolved detail for the current selection; `None` renders the prompt.
	#[prop(into)]
	detail: Signal<Option<DrugDetail>>,
) -> impl IntoView {
	view! {
		<div class="details">
			<h2>"drug details"</h2>
			{move || match detail.get() {
				None => Either::Left(view! {
					<p class="prompt">"select a drug from the sidebar to see details."</p>
				}),
				Some(detail) => {
					let drug = detail.drug;
					let interactions = detail.interactions;
					Either::Right(view! {
						<h3>{drug.name}</h3>
						<p><b>"class: "</b>{drug.drug_class}</p>
						<p><b>"targets: "</b>{drug.targets}</p>
						<p><b>"common side effects: "</b>{drug.side_effects}</p>
						<p><b>"summary: "</b>{drug.summary}</p>
						{if interactions.is_empty() {
							Either::Left(view! {
								<p>"no recorded interactions in dataset."</p>
							})
						} else {
							Either::Right(view! {
								<p>"known interactions:"</p>
								<ul>
									{interactions
										.into_iter()
										.map(|entry| {
											view! {
												<li>
													<b>{entry.other_name}</b>
													" — "
													{entry.kind}
													" / severity: "
													{entry.severity}
													" — "
													{entry.notes}
												</li>
											}
										})
										.collect_view()}
								</ul>
							})
						}}
					})
				}
			}}
		</div>
	}
}
