//! The expense form shared by the create and edit pages, and the parsing of its submissions.

use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, PrimitiveDateTime, Time, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    category::{CATEGORIES, Category, UNKNOWN_CATEGORY, category_icon},
    error::ValidationError,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::core::{NewExpense, parse_amount},
};

/// The format of `<input type="date">` values.
pub const DATE_INPUT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The raw values submitted by the expense form.
///
/// The amount and date are kept as text, and missing fields default to empty,
/// so that bad input is reported as a [ValidationError] instead of a rejected
/// request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseForm {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub category_id: Option<String>,
}

impl ExpenseForm {
    /// Parse the form into an expense ready for validation by the store.
    ///
    /// Only the day is chosen in the form, so the time of day is taken from
    /// `previous` when editing an expense without moving it to another day,
    /// from `now` for expenses dated today, and is midnight otherwise.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidAmount] or [ValidationError::InvalidDate]
    /// if those fields cannot be parsed.
    pub fn into_new_expense(
        self,
        now: PrimitiveDateTime,
        previous: Option<PrimitiveDateTime>,
    ) -> Result<NewExpense, ValidationError> {
        let amount = parse_amount(&self.amount)?;
        let date = Date::parse(self.date.trim(), DATE_INPUT_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        let date = match previous {
            Some(previous) if previous.date() == date => previous,
            _ if now.date() == date => now,
            _ => PrimitiveDateTime::new(date, Time::MIDNIGHT),
        };

        Ok(NewExpense {
            amount,
            date,
            description: self.description,
            category_id: self.category_id.unwrap_or_default(),
        })
    }
}

/// The initial values of the expense form.
pub struct ExpenseFormDefaults<'a> {
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
    pub category_id: &'a str,
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));

    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="What was this expense for?"
                required
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                required
                value=(defaults.date)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Category" }

            div class="grid grid-cols-2 sm:grid-cols-4 gap-2"
            {
                @for category in &CATEGORIES {
                    (category_option(category.id, category, category.id == defaults.category_id))
                }

                // Keeps an id missing from the catalog selected so saving does not change it.
                @if !CATEGORIES.iter().any(|category| category.id == defaults.category_id) {
                    (category_option(defaults.category_id, &UNKNOWN_CATEGORY, true))
                }
            }
        }
    }
}

fn category_option(value: &str, category: &Category, checked: bool) -> Markup {
    let input_id = format!("category-{value}");

    html! {
        label
            for=(input_id)
            class="flex flex-col items-center gap-1 p-2 rounded-lg border
                border-gray-200 dark:border-gray-600 cursor-pointer
                has-[:checked]:border-blue-500 has-[:checked]:bg-blue-50
                dark:has-[:checked]:bg-blue-900/30"
        {
            input
                type="radio"
                name="category_id"
                id=(input_id)
                value=(value)
                checked[checked]
                class="sr-only";

            (category_icon(category))
            span class="text-xs text-center" { (category.name) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::{date, datetime};

    use crate::{category::DEFAULT_CATEGORY_ID, error::ValidationError};

    use super::{ExpenseForm, ExpenseFormDefaults, expense_form_fields};

    fn form(amount: &str, date: &str) -> ExpenseForm {
        ExpenseForm {
            amount: amount.to_owned(),
            date: date.to_owned(),
            description: "Lunch".to_owned(),
            category_id: Some("food".to_owned()),
        }
    }

    #[test]
    fn past_date_is_midnight() {
        let expense = form("12.50", "2024-03-01")
            .into_new_expense(datetime!(2024-03-05 14:20), None)
            .unwrap();

        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.date, datetime!(2024-03-01 0:00));
        assert_eq!(expense.category_id, "food");
    }

    #[test]
    fn today_uses_current_time() {
        let expense = form("3", "2024-03-05")
            .into_new_expense(datetime!(2024-03-05 14:20), None)
            .unwrap();

        assert_eq!(expense.date, datetime!(2024-03-05 14:20));
    }

    #[test]
    fn unchanged_day_keeps_previous_time() {
        let expense = form("3", "2024-03-01")
            .into_new_expense(
                datetime!(2024-03-05 14:20),
                Some(datetime!(2024-03-01 8:15)),
            )
            .unwrap();

        assert_eq!(expense.date, datetime!(2024-03-01 8:15));
    }

    #[test]
    fn rejects_unparsable_fields() {
        let now = datetime!(2024-03-05 14:20);

        assert_eq!(
            form("abc", "2024-03-01").into_new_expense(now, None),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            form("1", "01/03/2024").into_new_expense(now, None),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let now = datetime!(2024-03-05 14:20);

        let no_amount: ExpenseForm =
            serde_urlencoded::from_str("date=2024-03-01&description=Lunch").unwrap();
        assert_eq!(
            no_amount.into_new_expense(now, None),
            Err(ValidationError::InvalidAmount)
        );

        let no_description: ExpenseForm =
            serde_urlencoded::from_str("amount=3&date=2024-03-01").unwrap();
        let expense = no_description.into_new_expense(now, None).unwrap();
        assert_eq!(expense.description, "");
        assert_eq!(expense.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn unknown_category_stays_selected() {
        let fields = expense_form_fields(&ExpenseFormDefaults {
            amount: Some(3.0),
            date: date!(2024 - 03 - 05),
            description: Some("Lunch"),
            category_id: "legacy",
        });
        let html = Html::parse_fragment(&maud::html! { form { (fields) } }.into_string());

        let radios = html
            .select(&Selector::parse("input[type=radio][name=category_id]").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(radios.len(), 9, "want the catalog plus the stored category");

        let checked = radios
            .iter()
            .filter(|input| input.value().attr("checked").is_some())
            .filter_map(|input| input.value().attr("value"))
            .collect::<Vec<_>>();
        assert_eq!(checked, vec!["legacy"]);
    }

    #[test]
    fn fields_check_default_category() {
        let fields = expense_form_fields(&ExpenseFormDefaults {
            amount: None,
            date: date!(2024 - 03 - 05),
            description: None,
            category_id: DEFAULT_CATEGORY_ID,
        });
        let html = Html::parse_fragment(&maud::html! { form { (fields) } }.into_string());

        let radios = html
            .select(&Selector::parse("input[type=radio][name=category_id]").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(radios.len(), 8, "want one radio per category");

        let checked = radios
            .iter()
            .filter(|input| input.value().attr("checked").is_some())
            .filter_map(|input| input.value().attr("value"))
            .collect::<Vec<_>>();
        assert_eq!(checked, vec![DEFAULT_CATEGORY_ID]);

        let date_input = html
            .select(&Selector::parse("input#date").unwrap())
            .next()
            .unwrap();
        assert_eq!(date_input.value().attr("value"), Some("2024-03-05"));
    }
}
