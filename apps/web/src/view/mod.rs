//! View layer — renders a controller `Snapshot` into the recommender page.
//!
//! Pure with respect to the snapshot: no state is read or mutated here. The
//! template name ends in `.html`, so minijinja auto-escapes every value.

use std::sync::OnceLock;

use minijinja::{context, Environment};

use crate::controller::Snapshot;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const INDEX_NAME: &str = "index.html";

/// Placeholder cards shown while a submission is in flight.
pub const SKELETON_COUNT: usize = 6;
/// Auto-refresh interval of the page while loading.
pub const REFRESH_SECS: u64 = 2;

fn environment() -> Result<&'static Environment<'static>, minijinja::Error> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    if let Some(env) = ENV.get() {
        return Ok(env);
    }
    let mut env = Environment::new();
    env.add_template(INDEX_NAME, INDEX_TEMPLATE)?;
    Ok(ENV.get_or_init(|| env))
}

pub fn render_page(snapshot: &Snapshot) -> Result<String, minijinja::Error> {
    environment()?.get_template(INDEX_NAME)?.render(context! {
        snapshot => snapshot,
        skeleton_count => SKELETON_COUNT,
        refresh_secs => REFRESH_SECS,
    })
}
