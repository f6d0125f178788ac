//! Single landing page composing every section in fixed vertical order.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::product::Product;
use crate::components::toast_container::ToastContainer;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <Header />
            <Banner />
            <Product />
            <Contact />
            <ToastContainer />
            <Footer />
        </div>
    }
}
