use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
fn SidebarLink(
    href: &'static str,
    icon_name: &'static str,
    label: &'static str,
    collapsed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <A href=href>
            <div class="sidebar__link">
                {icon(icon_name)}
                <Show when=move || !collapsed.get()>
                    <span class="sidebar__label">{label}</span>
                </Show>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <div class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <div class="sidebar__header">
                <Show when=move || !collapsed.get()>
                    <h1 class="sidebar__title">"INVENTORY"</h1>
                </Show>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {icon("menu")}
                </button>
            </div>

            <nav class="sidebar__links">
                <SidebarLink href="/dashboard" icon_name="dashboard" label="Dashboard" collapsed=collapsed />
                <SidebarLink href="/products" icon_name="products" label="Products" collapsed=collapsed />
                <SidebarLink href="/add" icon_name="plus" label="Add Product" collapsed=collapsed />
                <SidebarLink href="/add-purchase" icon_name="purchases" label="Add Purchase" collapsed=collapsed />
                <SidebarLink href="/purchase-history" icon_name="file" label="Purchase History" collapsed=collapsed />
                <SidebarLink href="/notifications" icon_name="bell" label="Notifications" collapsed=collapsed />
            </nav>

            <Show when=move || !collapsed.get()>
                <div class="sidebar__footer">
                    <p>"© 2024 Inventory"</p>
                </div>
            </Show>
        </div>
    }
}
