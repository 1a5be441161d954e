//! Integration tests for santa-list

use santa_list::{
    Behaviour, FieldId, FormController, Gender, RejectionKind, ScriptedBackend, Transcript,
};

/// A form filled in correctly, not yet saved.
fn filled(name: &str, surname: &str, age: &str, gifts: &str) -> ScriptedBackend {
    ScriptedBackend::new()
        .type_text(FieldId::Name, name)
        .type_text(FieldId::Surname, surname)
        .choose_gender(Gender::Female)
        .type_text(FieldId::Age, age)
        .type_text(FieldId::Country, "Finland")
        .type_text(FieldId::Intentions, "Bring reindeer snacks")
        .type_text(FieldId::Gifts, gifts)
        .choose_behaviour(Behaviour::No)
}

fn run(script: ScriptedBackend) -> FormController<Transcript> {
    let mut controller = FormController::new(Transcript::new());
    controller.run(&script).unwrap();
    controller
}

#[test]
fn test_accepted_submission_is_echoed() {
    let controller = run(filled("Jonas", "Smith", "30", "12").save());

    assert_eq!(
        controller.console().lines(),
        [
            "Name Jonas",
            "Surname Smith",
            "Gender Female",
            "Age 30",
            "Country Finland",
            "Intentions Bring reindeer snacks",
            "Number of Gifts 12",
            "Good Behaviour Maybe Not...",
            "Congratulations!",
            "Your seat at the Christmas Table is secured!",
            "Get ready to jingle all the way!!",
        ]
    );
}

#[test]
fn test_accepted_submission_keeps_the_form() {
    let controller = run(filled("Jonas", "Smith", "30", "12").save());
    assert_eq!(controller.state().value(FieldId::Name), "Jonas");
    assert_eq!(controller.state().value(FieldId::Gender), "Female");
}

#[test]
fn test_gift_shortage() {
    let controller = run(ScriptedBackend::new()
        .type_text(FieldId::Name, "Jonas")
        .type_text(FieldId::Surname, "Smith")
        .choose_gender(Gender::Male)
        .type_text(FieldId::Age, "10")
        .type_text(FieldId::Gifts, "3")
        .choose_behaviour(Behaviour::Yes)
        .save());

    assert_eq!(
        controller.console().lines(),
        [
            "Is that all the magic you've got in your sleigh?",
            "Looks like someone might be on the 'Naughty List' for a gift shortage!",
        ]
    );
    assert_eq!(controller.state().value(FieldId::Gifts), "3");
}

#[test]
fn test_same_name_and_surname() {
    let controller = run(ScriptedBackend::new()
        .type_text(FieldId::Name, "Johnny")
        .type_text(FieldId::Surname, "Johnny")
        .type_text(FieldId::Age, "not a number")
        .save());

    assert_eq!(
        controller.console().lines(),
        ["Name and Surname must be different!"]
    );
    assert_eq!(controller.state().value(FieldId::Age), "not a number");
}

#[test]
fn test_missing_gender() {
    let controller = run(filled("Jonas", "Smith", "30", "12")
        .select(FieldId::Gender, 0)
        .save());

    assert_eq!(controller.console().lines(), ["Please enter your Gender!"]);
}

#[test]
fn test_missing_behaviour() {
    let controller = run(filled("Jonas", "Smith", "30", "1")
        .select(FieldId::Behaviour, 0)
        .save());

    assert_eq!(
        controller.console().lines(),
        ["Please enter if you behave this year!"]
    );
}

#[test]
fn test_short_name_clears_both_names() {
    let controller = run(filled("John", "Smith", "30", "12").save());

    assert_eq!(
        controller.console().lines(),
        ["Invalid Entry!", "Please enter a valid one!"]
    );
    assert_eq!(controller.state().value(FieldId::Name), "");
    assert_eq!(controller.state().value(FieldId::Surname), "");
    assert_eq!(controller.state().value(FieldId::Gifts), "12");
}

#[test]
fn test_bad_number_clears_both_numbers() {
    let controller = run(filled("Jonas", "Smith", "30", "3.5").save());

    assert_eq!(
        controller.console().lines(),
        ["Invalid entry!", "Please enter an integer value!"]
    );
    assert_eq!(controller.state().value(FieldId::Age), "");
    assert_eq!(controller.state().value(FieldId::Gifts), "");
    assert_eq!(controller.state().value(FieldId::Name), "Jonas");
}

#[test]
fn test_enter_in_name_field_validates() {
    let controller = run(ScriptedBackend::new()
        .type_text(FieldId::Name, "Jonas")
        .press_enter(FieldId::Name)
        .type_text(FieldId::Surname, "smith")
        .press_enter(FieldId::Surname));

    assert_eq!(
        controller.console().lines(),
        ["Invalid Entry!", "Please enter a valid one!"]
    );
    assert_eq!(controller.state().value(FieldId::Name), "");
}

#[test]
fn test_enter_in_number_field_validates() {
    let controller = run(ScriptedBackend::new()
        .type_text(FieldId::Age, "-5")
        .press_enter(FieldId::Age)
        .type_text(FieldId::Gifts, "0")
        .press_enter(FieldId::Gifts));

    assert_eq!(
        controller.console().lines(),
        ["You can not input a negative number!"]
    );
    assert_eq!(controller.state().value(FieldId::Age), "-5");
}

#[test]
fn test_form_recovers_after_rejection() {
    let controller = run(filled("Jonas", "Smith", "30", "abc")
        .save()
        .type_text(FieldId::Age, "30")
        .type_text(FieldId::Gifts, "9")
        .save());

    let lines = controller.console().lines();
    assert_eq!(lines[0], "Invalid entry!");
    assert_eq!(lines.last().map(String::as_str), Some("Get ready to jingle all the way!!"));
}

#[test]
fn test_rejection_kinds_through_save() -> anyhow::Result<()> {
    let mut controller = FormController::new(Transcript::new());
    controller.run(&filled("Jonas", "Smith", "30", "2"))?;

    let rejection = controller.save().unwrap_err();
    assert_eq!(rejection.kind(), RejectionKind::Range);
    assert_eq!(rejection.field(), Some(FieldId::Gifts));
    Ok(())
}

#[test]
fn test_resubmitting_after_acceptance() -> anyhow::Result<()> {
    let mut controller = FormController::new(Transcript::new());
    controller.run(&filled("Jonas", "Smith", "30", "12"))?;

    let first = controller.save()?;
    controller.console_mut().clear();
    let second = controller.save()?;

    assert_eq!(first, second);
    assert_eq!(controller.console().lines().len(), 11);
    Ok(())
}
