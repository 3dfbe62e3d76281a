//! Application Context
//!
//! The catalog and router are built in `main` and handed to `App`, which
//! provides them to all children through the Leptos Context API.

use leptos::prelude::*;
use leptos_routes::{provide_router, use_router, Router};

use crate::catalog::Catalog;
use crate::routes::Page;

pub fn provide_site_context(catalog: Catalog, router: Router<Page>) {
    provide_context(catalog);
    provide_router(router);
}

pub fn use_catalog() -> Catalog {
    expect_context::<Catalog>()
}

pub fn use_site_router() -> Router<Page> {
    use_router::<Page>()
}
