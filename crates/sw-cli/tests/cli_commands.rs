//! Integration tests for the sw-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn sagenweber() -> Command {
    Command::cargo_bin("sagenweber").unwrap()
}

fn play() -> Command {
    let mut cmd = sagenweber();
    cmd.args([
        "play",
        "--seed",
        "1",
        "--no-encounters",
        "--name",
        "Aria",
        "--genre",
        "fantasy",
        "--keywords",
        "dragons,prophecy",
    ]);
    cmd
}

#[test]
fn help_lists_subcommands() {
    sagenweber()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn play_scripted_session() {
    play()
        .write_stdin("look\nstatus\nequip iron sword\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You arrive at Dark Forest."))
        .stdout(predicate::str::contains("== Dark Forest =="))
        .stdout(predicate::str::contains("Name: Aria"))
        .stdout(predicate::str::contains("Damage Bonus: +15"))
        .stdout(predicate::str::contains("Combat Encounters: Disabled"))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_reports_bad_commands_and_keeps_going() {
    play()
        .write_stdin("dance\n\nattack\ngo south\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown command. Type 'help' for commands.",
        ))
        .stdout(predicate::str::contains("Please enter a command."))
        .stdout(predicate::str::contains("You're not in combat."))
        .stdout(predicate::str::contains("You can't go south from here."))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_walks_the_ring() {
    play()
        .write_stdin("n\nn\nn\nn\nn\nstory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You arrive at Dragon's Lair."))
        .stdout(predicate::str::contains("You're back at Dark Forest."))
        .stdout(predicate::str::contains("Progress: 5/5"));
}

#[test]
fn play_prompts_for_missing_setup() {
    sagenweber()
        .args(["play", "--seed", "3", "--no-encounters"])
        .write_stdin("Bran\nhorror\nghosts, fog\nstatus\nstory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is your name, adventurer?"))
        .stdout(predicate::str::contains("You arrive at Haunted Mansion."))
        .stdout(predicate::str::contains("Name: Bran"))
        .stdout(predicate::str::contains("Keywords: ghosts, fog"));
}

#[test]
fn play_ends_at_end_of_input() {
    play().write_stdin("look\n").assert().success();
}

#[test]
fn generate_text() {
    sagenweber()
        .args(["generate", "--seed", "5", "--genre", "scifi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Space Station"))
        .stdout(predicate::str::contains("north -> loc_1"))
        .stdout(predicate::str::contains("Starting items"));
}

#[test]
fn generate_json() {
    sagenweber()
        .args(["generate", "--seed", "5", "--format", "json", "--locations", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"story\""))
        .stdout(predicate::str::contains("\"starting_items\""))
        .stdout(predicate::str::contains("Dark Forest"));
}

#[test]
fn unknown_genre_falls_back_to_fantasy() {
    sagenweber()
        .args(["generate", "--seed", "5", "--genre", "western"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark Forest"));
}

#[test]
fn bad_format_is_rejected() {
    sagenweber()
        .args(["generate", "--format", "yaml"])
        .assert()
        .failure();
}
