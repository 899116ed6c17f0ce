//! Static UI texts of the merch pages in every supported locale

use contracts::domain::a001_merch::MerchField;
use contracts::enums::MerchDirection;
use contracts::shared::form_settings::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    MerchIn,
    MerchOut,
    AddMerch,
    Delete,
    Description,
    ItemName,
    Price,
    Amount,
    Date,
    TotalSpent,
    SaleOverExpectedSales,
    Language,
}

impl TextKey {
    /// Column header of an editable field
    pub fn field(field: MerchField) -> Self {
        match field {
            MerchField::Description => TextKey::Description,
            MerchField::ItemName => TextKey::ItemName,
            MerchField::Price => TextKey::Price,
            MerchField::Amount => TextKey::Amount,
            MerchField::Date => TextKey::Date,
        }
    }

    /// Table title for a direction
    pub fn title(direction: MerchDirection) -> Self {
        match direction {
            MerchDirection::In => TextKey::MerchIn,
            MerchDirection::Out => TextKey::MerchOut,
        }
    }

    /// Header of the derived money column for a direction
    pub fn derived_column(direction: MerchDirection) -> Self {
        match direction {
            MerchDirection::In => TextKey::TotalSpent,
            MerchDirection::Out => TextKey::SaleOverExpectedSales,
        }
    }
}

pub fn tr(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => match key {
            TextKey::MerchIn => "Merch in",
            TextKey::MerchOut => "Merch out",
            TextKey::AddMerch => "Add merch",
            TextKey::Delete => "Delete",
            TextKey::Description => "Description",
            TextKey::ItemName => "Item name",
            TextKey::Price => "Price",
            TextKey::Amount => "Amount",
            TextKey::Date => "Date",
            TextKey::TotalSpent => "Total spent",
            TextKey::SaleOverExpectedSales => "Sale / expected sales",
            TextKey::Language => "Language",
        },
        Locale::Ru => match key {
            TextKey::MerchIn => "Поступление товара",
            TextKey::MerchOut => "Выбытие товара",
            TextKey::AddMerch => "Добавить",
            TextKey::Delete => "Удалить",
            TextKey::Description => "Описание",
            TextKey::ItemName => "Товар",
            TextKey::Price => "Цена",
            TextKey::Amount => "Количество",
            TextKey::Date => "Дата",
            TextKey::TotalSpent => "Потрачено",
            TextKey::SaleOverExpectedSales => "Продажи / ожидаемые продажи",
            TextKey::Language => "Язык",
        },
    }
}

/// "N selected items" with the plural form the locale needs
pub fn selected_items(locale: Locale, count: usize) -> String {
    match locale {
        Locale::En if count == 1 => "1 selected item".to_string(),
        Locale::En => format!("{} selected items", count),
        Locale::Ru => {
            let (verb, noun) = match ru_plural_form(count) {
                RuPlural::One => ("Выбран", "элемент"),
                RuPlural::Few => ("Выбрано", "элемента"),
                RuPlural::Many => ("Выбрано", "элементов"),
            };
            format!("{} {} {}", verb, count, noun)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum RuPlural {
    One,
    Few,
    Many,
}

fn ru_plural_form(n: usize) -> RuPlural {
    let (rem10, rem100) = (n % 10, n % 100);
    if rem10 == 1 && rem100 != 11 {
        RuPlural::One
    } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
        RuPlural::Few
    } else {
        RuPlural::Many
    }
}
