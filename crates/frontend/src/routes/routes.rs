use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d100_sales_report::ui::dashboard::SalesDashboard;
use crate::domain::notification::ui::list::Notifications;
use crate::domain::product::ui::details::view::{AddProductPage, EditProductPage};
use crate::domain::product::ui::details::ProductDetailsPage;
use crate::domain::product::ui::list::ProductsList;
use crate::domain::purchase::ui::details::AddPurchase;
use crate::domain::purchase::ui::list::PurchaseHistory;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=ProductsList />
                    <Route path=path!("/dashboard") view=SalesDashboard />
                    <Route path=path!("/products") view=ProductsList />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/add") view=AddProductPage />
                    <Route path=path!("/edit-product/:id") view=EditProductPage />
                    <Route path=path!("/add-purchase") view=AddPurchase />
                    <Route path=path!("/purchase-history") view=PurchaseHistory />
                    <Route path=path!("/notifications") view=Notifications />
                </Routes>
            </Shell>
        </Router>
    }
}
