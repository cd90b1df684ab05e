use maud::{html, Markup, PreEscaped, DOCTYPE};

const PAGE_STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
header { display: flex; align-items: center; gap: 1rem; padding: .75rem 1.5rem; box-shadow: 0 1px 4px rgba(0,0,0,.12); }
main { display: flex; height: calc(100vh - 56px); }
#sidebar { width: 360px; overflow-y: auto; padding: 1rem; border-right: 1px solid #ddd; }
#map { flex: 1; }
fieldset { border: 1px solid #ddd; border-radius: 6px; margin-bottom: .75rem; }
.amount-range input { width: 4.5rem; }
.property-item { padding: .5rem; border-bottom: 1px solid #eee; cursor: pointer; }
.property-item:hover { background: #f6f6ff; }
.info-window { padding: .5rem; font-size: .9rem; }
"#;

/// Full-height page with a sidebar and a map pane. `scripts` go at the end
/// of the body, after the content they bind to.
pub fn desktop_layout(title: &str, head: Markup, content: Markup, scripts: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PAGE_STYLE)) }
                (head)
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { (title) }
                }
                (content)
                (scripts)
            }
        }
    }
}
