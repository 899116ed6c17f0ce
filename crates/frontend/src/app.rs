use crate::domain::a001_merch::{MerchStore, MerchTable};
use crate::shared::i18n::{tr, TextKey};
use crate::shared::page_frame::PageFrame;
use crate::shared::settings::{load_settings, provide_settings, save_settings};
use contracts::domain::a001_merch::MerchEdit;
use contracts::domain::a002_item::Item;
use contracts::enums::MerchDirection;
use contracts::shared::form_settings::Locale;
use leptos::prelude::*;
use thaw::*;

fn starter_catalog() -> Vec<Item> {
    vec![
        Item::new("Shirt", 15.0),
        Item::new("Cap", 8.0),
        Item::new("Poster", 5.0),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let settings = provide_settings(load_settings());
    let items = RwSignal::new(starter_catalog());

    let set_locale = move |locale: Locale| {
        settings.update(|s| s.locale = locale);
        settings.with_untracked(save_settings);
    };

    let page = move |direction: MerchDirection| {
        let store = MerchStore::new(direction, Vec::new());

        // rejected edits land in store.error
        let on_update = Callback::new(move |edit: MerchEdit| {
            let _ = store.update(edit);
        });
        let on_add = Callback::new(move |_: ()| {
            store.add();
        });
        let on_delete = Callback::new(move |ids: Vec<String>| {
            store.delete(&ids);
        });

        view! {
            {move || store.error.get().map(|err| view! {
                <div class="alert alert--error">{err.to_string()}</div>
            })}
            <MerchTable
                direction=direction
                merch=store.merch
                items=items
                on_update=on_update
                on_add=on_add
                on_delete=on_delete
            />
        }
    };

    view! {
        <PageFrame page_id="a001_merch--list" category="list">
            <div class="page__header">
                <div class="page__header-right">
                    <span>{move || tr(settings.with(|s| s.locale), TextKey::Language)}": "</span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| set_locale(Locale::En)
                    >
                        "EN"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| set_locale(Locale::Ru)
                    >
                        "RU"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {MerchDirection::all().into_iter().map(page).collect_view()}
            </div>
        </PageFrame>
    }
}
