use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This slide doesn't exist."}</p>
            <Link<Route> to={Route::Landing} classes="not-found-link">
                {"Back to the story"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #111827;
                    background: #f8fafc;
                }

                html.dark .not-found {
                    color: #f9fafb;
                    background: #020617;
                }

                .not-found h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    margin: 0;
                }

                .not-found-link {
                    margin-top: 2rem;
                    color: inherit;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
