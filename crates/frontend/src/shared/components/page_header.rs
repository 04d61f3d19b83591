use leptos::prelude::*;

/// Heading block at the top of every page: eyebrow, title, lead paragraph,
/// and an optional slot on the right (filters, actions).
#[component]
pub fn PageHeader(
    /// Small uppercase line above the title
    #[prop(optional, into)]
    eyebrow: MaybeProp<String>,
    /// Page title (required)
    #[prop(into)]
    title: String,
    /// `id` of the `<h1>`, referenced by `aria-labelledby` on the page
    #[prop(into)]
    heading_id: String,
    /// Optional lead paragraph
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Right-hand actions; the slot is omitted when absent
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                {move || eyebrow.get().map(|e| view! {
                    <p class="page-header__eyebrow">{e}</p>
                })}
                <h1 id=heading_id class="page-header__title text-gradient">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_with_and_without_actions() {
        Owner::new().with(|| {
            let _bare = view! {
                <PageHeader title="Experience" heading_id="experience-heading" />
            };
            let _with_actions = view! {
                <PageHeader title="Skillset" heading_id="expertise-heading">
                    <a href="/work">"See it in projects"</a>
                </PageHeader>
            };
        });
    }
}
