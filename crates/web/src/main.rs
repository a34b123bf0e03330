mod stepper;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use wasm_bindgen::JsValue;

use stepper::{Frame, Walkthrough, format_pairs, format_values, parse_values};

const DEFAULT_INPUT: &str = "24 10 10 97 42 32 40 84 29 26 66 96 57 13 46 30 91 48 11";
const RANDOM_COUNT: usize = 21;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

/// Reads `?values=...` from the page URL.
fn query_values() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let raw = search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("values="))?;
    let decoded = js_sys::decode_uri_component(&raw.replace('+', " ")).ok()?;
    Some(String::from(decoded))
}

/// Mirrors the input into the page URL without adding a history entry.
fn store_values(text: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let encoded = String::from(js_sys::encode_uri_component(text));
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("?values={encoded}")));
}

fn random_values() -> Vec<i32> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = js_sys::Date::now() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    Uniform::new_inclusive(1, 99)
        .sample_iter(&mut rng)
        .take(RANDOM_COUNT)
        .collect()
}

#[component]
fn App() -> impl IntoView {
    let (input, set_input) = signal(query_values().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let (cursor, set_cursor) = signal(0usize);
    let walkthrough = Memo::new(move |_| parse_values(&input.get()).map(Walkthrough::new));

    let update = move |text: String| {
        store_values(&text);
        set_cursor.set(0);
        set_input.set(text);
    };

    view! {
        <main>
            <h1>"Merge-insertion sort"</h1>
            <div class="controls">
                <input
                    type="text"
                    size="64"
                    prop:value=input
                    on:input=move |ev| update(event_target_value(&ev))
                />
                <button on:click=move |_| update(format_values(&random_values()))>"Random"</button>
            </div>
            {move || match walkthrough.get() {
                Ok(walk) => walkthrough_view(walk, cursor, set_cursor).into_any(),
                Err(err) => view! { <p class="error">{err.to_string()}</p> }.into_any(),
            }}
        </main>
    }
}

fn walkthrough_view(
    walk: Walkthrough,
    cursor: ReadSignal<usize>,
    set_cursor: WriteSignal<usize>,
) -> impl IntoView {
    let frames = walk.frames().to_vec();
    let last = frames.len() - 1;
    let leftover = walk
        .leftover()
        .map_or_else(|| "none".to_string(), |v| v.to_string());

    view! {
        <section class="stages">
            <h2>"Stages"</h2>
            <p>"input: " {format_values(walk.input())}</p>
            <p>"pairs: " {format_pairs(walk.split_pairs())} " leftover: " {leftover}</p>
            <p>"merge-sorted pairs: " {format_pairs(walk.sorted_pairs())}</p>
            <p>"main chain: " {format_values(&walk.chains().main)}</p>
            <p>"pend: " {format_values(&walk.chains().pend)}</p>
            <p>
                "comparisons: " {walk.comparisons()} " (worst case "
                {mergeinsert::comparison_bound(walk.input().len())} ")"
            </p>
        </section>
        <section class="insertions">
            <h2>"Insertions"</h2>
            <button
                disabled=move || cursor.get() == 0
                on:click=move |_| set_cursor.update(|c| *c = c.saturating_sub(1))
            >
                "Prev"
            </button>
            <span>{move || format!(" step {} / {last} ", cursor.get())}</span>
            <button
                disabled=move || cursor.get() >= last
                on:click=move |_| set_cursor.update(|c| *c = (*c + 1).min(last))
            >
                "Next"
            </button>
            {move || frame_view(frames[cursor.get().min(last)].clone())}
        </section>
    }
}

fn frame_view(frame: Frame) -> impl IntoView {
    let cells = frame
        .chain
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let class = frame.cell_class(i);
            view! { <span class=class>{value}" "</span> }
        })
        .collect_view();
    let pending = frame
        .pending
        .iter()
        .map(|(i, v)| format!("[{i}]={v}"))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <p class="caption">{frame.caption()}</p>
        <div class="chain">{cells}</div>
        <p>"waiting: " {pending}</p>
    }
}
