//! # AutoMOS CLI Application
//!
//! Interactive terminal session for the MOSFET drain-current calculator.
//! The session owns all prompting and printing; every calculation goes
//! through the pure functions in `mos_core`.
//!
//! ## Flow
//!
//! - Outer loop: enter the device parameters shared across evaluations
//!   (gamma, 2*phi_F, lambda)
//! - Inner loop: pick one of the four model/polarity equations, enter the
//!   bias point, and evaluate; option (5) returns to the parameter prompt

use std::io::{self, BufRead, Write};

use mos_core::calculations::drain_current::{calculate, DrainCurrentResult};
use mos_core::device::{ChannelModel, OperatingRegion, Polarity, ShortChannelGeometry, Terminals};
use mos_core::process::{solve_k, ProcessInput};
use mos_core::threshold::{apply_correction, check_enhancement, SignDecision};
use mos_core::units::{
    format_metric, Centimeters, CmPerSecond, MegaCmPerSecond, Micrometers, Nanometers,
};
use mos_core::{DrainCurrentInput, MosError, MosResult, SessionParameters};

fn read_trimmed(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        // EOF or a broken stdin ends the session
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_f64(prompt: &str) -> f64 {
    loop {
        let input = read_trimmed(prompt);
        match input.parse() {
            Ok(value) => return value,
            Err(_) => println!("Could not read '{}' as a number, try again.", input),
        }
    }
}

/// Yes/no prompt. Anything that is not a clear yes or no falls back to
/// `default_yes`.
fn prompt_yes_no(prompt: &str, default_yes: bool) -> bool {
    let answer = read_trimmed(prompt).to_lowercase();
    match answer.chars().next() {
        Some('y') => true,
        Some('n') => false,
        _ => default_yes,
    }
}

fn main() {
    println!("AutoMOS - MOSFET Drain-Current Calculator");
    println!("=========================================");
    println!();

    loop {
        println!("Enter device parameters...");
        let gamma = prompt_f64("y = ");
        let phi_2f = prompt_f64("PHI2F = ");
        let lambda = prompt_f64("LAMBDA = ");
        let mut session = SessionParameters::new(gamma, phi_2f, lambda);

        loop {
            println!();
            println!("(1) LCM NMOS");
            println!("(2) LCM PMOS");
            println!("(3) SCM NMOS");
            println!("(4) SCM PMOS");
            println!("(5) Change device parameters");
            let choice = read_trimmed("(1), (2), (3), (4), (5): ");

            let (model, polarity) = match choice.as_str() {
                "1" => (ChannelModel::LongChannel, Polarity::Nmos),
                "2" => (ChannelModel::LongChannel, Polarity::Pmos),
                "3" => (ChannelModel::ShortChannel, Polarity::Nmos),
                "4" => (ChannelModel::ShortChannel, Polarity::Pmos),
                _ => break,
            };

            run_evaluation(&mut session, model, polarity);
        }
    }
}

fn run_evaluation(session: &mut SessionParameters, model: ChannelModel, polarity: Polarity) {
    let terminals = Terminals {
        vg: prompt_f64("VG = "),
        vd: prompt_f64("VD = "),
        vs: prompt_f64("VS = "),
        vb: prompt_f64("VB = "),
    };

    let vt0 = prompt_threshold(polarity);

    // The SCM needs EC and L for the equation itself; the LCM only asks
    // for them if k ends up being derived from geometry.
    let geometry = match model {
        ChannelModel::ShortChannel => Some(prompt_geometry(polarity)),
        ChannelModel::LongChannel => None,
    };

    let k = match acquire_k(session, polarity, geometry) {
        Ok(k) => k,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    let input = DrainCurrentInput {
        polarity,
        model,
        terminals,
        vt0,
        body: session.body_effect(),
        k,
        lambda: session.lambda,
        geometry,
    };

    match calculate(&input) {
        Ok(result) => report(&result),
        Err(e) => report_error(&e),
    }
}

/// Prompt for the zero-bias threshold, offering a sign flip when the value
/// describes a depletion-mode device.
fn prompt_threshold(polarity: Polarity) -> f64 {
    let symbol = polarity.threshold_symbol();
    let entered = prompt_f64(&format!("{} = ", symbol));

    if check_enhancement(entered, polarity).is_none() {
        return entered;
    }

    let flip = prompt_yes_no(
        "The value you entered is for a depletion MOSFET. Treat it as an enhancement MOSFET? (y/n): ",
        false,
    );
    let decision = if flip { SignDecision::Flip } else { SignDecision::Keep };
    let value = apply_correction(entered, decision);
    if flip {
        println!("{} is now {}", symbol, value);
    }
    value
}

fn prompt_geometry(polarity: Polarity) -> ShortChannelGeometry {
    let (ec_symbol, l_symbol) = match polarity {
        Polarity::Nmos => ("ECN", "LN"),
        Polarity::Pmos => ("ECP", "LP"),
    };
    ShortChannelGeometry {
        ec: prompt_f64(&format!("{} = ", ec_symbol)),
        l: prompt_f64(&format!("{} = ", l_symbol)),
    }
}

/// Get the transconductance for this evaluation: reuse the session's
/// previous value, take it as given, or derive it from geometry.
fn acquire_k(
    session: &mut SessionParameters,
    polarity: Polarity,
    geometry: Option<ShortChannelGeometry>,
) -> MosResult<f64> {
    if session.has_k(polarity) {
        let reuse = prompt_yes_no(
            &format!("Use previous {} value? Y or N: ", polarity.k_symbol()),
            true,
        );
        if reuse {
            if let Some(k) = session.k_for(polarity) {
                return Ok(k);
            }
        }
    }

    let given = prompt_yes_no("Is K given? Y or N: ", true);
    let k = if given {
        prompt_f64(&format!("{} = ", polarity.k_symbol()))
    } else {
        let geometry = geometry.unwrap_or_else(|| prompt_geometry(polarity));
        derive_k(polarity, geometry)?
    };

    session.set_k(polarity, k);
    Ok(k)
}

/// Prompt for W/VSAT/TOX in their entry units and solve for k, reporting
/// the intermediate oxide capacitance as well.
fn derive_k(polarity: Polarity, geometry: ShortChannelGeometry) -> MosResult<f64> {
    let width: Centimeters = Micrometers(prompt_f64("W (um) = ")).into();
    let vsat: CmPerSecond = MegaCmPerSecond(prompt_f64("VSAT (million cm/s) = ")).into();
    let tox: Centimeters = Nanometers(prompt_f64("T_OX (nm) = ")).into();

    let input = ProcessInput {
        width_cm: width.value(),
        vsat_cm_per_s: vsat.value(),
        tox_cm: tox.value(),
        ec: geometry.ec,
        l: geometry.l,
    };

    let result = solve_k(&input)?;
    println!("SOLVED: COX = {}", format_metric(result.cox_f_per_cm2, "F/cm^2"));
    println!(
        "SOLVED: {} = {}",
        polarity.k_symbol(),
        format_metric(result.k, "A/V^2")
    );
    Ok(result.k)
}

fn report(result: &DrainCurrentResult) {
    println!();
    match result.region {
        OperatingRegion::Off => println!("Device is off!"),
        OperatingRegion::Triode => println!("Device is in TRIODE!"),
        OperatingRegion::Saturation => println!("Device is in SATURATION!"),
    }
    println!("ID = {}", format_metric(result.id_amps, "amps"));

    println!();
    println!("Result JSON:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }

    let _ = read_trimmed("Enter to continue...");
}

fn report_error(e: &MosError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
