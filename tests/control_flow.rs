mod support;

use support::{check_run, Expected};

#[test]
fn if_else_picks_a_branch() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        "if (true) print \"yes\" else print \"no\"\n",
        Expected {
            stdout: "yes",
            stderr: "",
        },
    )
}

#[test]
fn while_loop_accumulates() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        "var i = 0\n\
         var total = \"\"\n\
         while (i < 3) {\n\
         total = total + i\n\
         i = i + 1\n\
         }\n\
         print total\n",
        Expected {
            stdout: "012",
            stderr: "",
        },
    )
}

#[test]
fn string_concatenation_coerces_numbers() -> Result<(), Box<dyn std::error::Error>> {
    check_run(
        "print \"count: \" + 1.500000\n",
        Expected {
            stdout: "count: 1.5",
            stderr: "",
        },
    )
}
