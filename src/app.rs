/// Demo gallery
///
/// Small client-side app that mounts a handful of button configurations.
/// Demo plumbing only; the library surface is `components::button`.

use leptos::*;

use crate::components::button::{Button, ButtonRole, ButtonType};

#[component]
pub fn App() -> impl IntoView {
    let (saves, set_saves) = create_signal(0);

    let on_save = Callback::new(move |()| {
        set_saves.update(|n| *n += 1);
        log::info!("save clicked");
    });
    let on_delete = Callback::new(|()| {
        log::info!("delete clicked");
    });

    view! {
        <main class="gallery">
            <h1>"Button"</h1>

            <section>
                <h2>"Roles"</h2>
                <Button label="Save" on_click=on_save/>
                <Button label="Delete" role=ButtonRole::Secondary on_click=on_delete/>
                <p>{move || format!("saved {} times", saves.get())}</p>
            </section>

            <section>
                <h2>"Types"</h2>
                <form on:submit=|ev| ev.prevent_default()>
                    <Button label="Submit" button_type=ButtonType::Submit/>
                    <Button label="Reset" button_type=ButtonType::Reset role=ButtonRole::Secondary/>
                </form>
            </section>

            <section>
                <h2>"Pass-through"</h2>
                <Button label="Disabled" attr:disabled=true/>
                <Button label="Go" class="wide"/>
            </section>
        </main>
    }
}
