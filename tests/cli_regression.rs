// Regression tests for the cssel binary: output and miette diagnostics.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn cssel() -> Command {
    let mut cmd = Command::cargo_bin("cssel").unwrap();
    cmd.env_remove("CSSEL_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn cli_builds_a_selector() {
    cssel()
        .args(["build", "element:div", "id:main", "class:container", "class:draggable"])
        .assert()
        .success()
        .stdout("div#main.container.draggable\n");
}

#[test]
fn cli_builds_attribute_selectors_verbatim() {
    cssel()
        .args(["build", "element:a", "attr:href$=\".png\"", "pseudo-class:focus"])
        .assert()
        .success()
        .stdout("a[href$=\".png\"]:focus\n");
}

#[test]
fn cli_combines_two_selectors() {
    cssel()
        .args([
            "combine", "--left", "element:ul", "class:nav", "-c", "+", "--right", "element:p",
        ])
        .assert()
        .success()
        .stdout("ul.nav + p\n");
}

#[test]
fn cli_reports_out_of_order_parts() {
    cssel()
        .args(["build", "class:a", "id:b"])
        .assert()
        .failure()
        .stderr(contains("cssel::selector::out_of_order").and(contains("id cannot follow class")));
}

#[test]
fn cli_reports_duplicate_parts() {
    cssel()
        .args(["build", "element:div", "element:span"])
        .assert()
        .failure()
        .stderr(contains("cssel::selector::duplicate_part"));
}

#[test]
fn cli_reports_unknown_part_kinds() {
    cssel()
        .args(["build", "tag:div"])
        .assert()
        .failure()
        .stderr(contains("unknown selector part kind").or(contains("cssel::part_spec")));
}

#[test]
fn cli_prints_rectangle_area_and_json() {
    cssel().args(["rect", "3", "4"]).assert().success().stdout("12\n");
    cssel()
        .args(["rect", "3", "4", "--json"])
        .assert()
        .success()
        .stdout("{\"width\":3.0,\"height\":4.0}\n");
}

#[test]
fn cli_area_fills_missing_fields_from_unit_rectangle() {
    cssel()
        .args(["area", "{\"width\": 6}"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn cli_area_rejects_non_objects() {
    cssel()
        .args(["area", "[1]"])
        .assert()
        .failure()
        .stderr(contains("cssel::json::not_an_object"));
}
