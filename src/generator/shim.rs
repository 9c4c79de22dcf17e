//! Synthesize one public shim around a non-public command handler.
//!
//! A shim is `public async <shim return type> <handler><suffix>(...)` whose body awaits the handler, forwarding
//! every parameter positionally by name, and then reports success.
//!
//! ## Notes
//!
//! - The parameter list is spelled out only when at least one parameter carries an annotation; otherwise the shim
//!   takes `()`.
//! - With failure propagation enabled, an exception escaping the forwarded call becomes
//!   `Result.FromError(new ExceptionError(ex))`.

use cmdshim_core::lang::well_known::{self, WellKnownTypeId};
use cmdshim_syntax::{FunctionSymbol, Parameter};

use super::config::GeneratorConfig;
use super::metadata::emit_annotations;
use crate::emit::CodeWriter;

/// Shim name for a handler.
pub fn shim_name(handler: &str, config: &GeneratorConfig) -> String {
    format!("{}{}", handler, config.shim_suffix)
}

/// Emit the shim for `function` into `writer`.
pub fn emit_shim(writer: &mut CodeWriter<'_>, function: &FunctionSymbol, config: &GeneratorConfig) {
    let signature = format!(
        "public async {} {}",
        config.shim_return_type,
        shim_name(&function.name, config)
    );

    if spells_out_parameters(&function.parameters) {
        writer.append_line(&format!("{}(", signature));
        {
            let mut params = writer.child();
            let last = function.parameters.len() - 1;
            for (i, parameter) in function.parameters.iter().enumerate() {
                emit_parameter(&mut params, parameter, i < last);
            }
            params.release();
        }
        writer.append_line(")");
    } else {
        writer.append_line(&format!("{}()", signature));
    }

    writer.append_line("{");
    {
        let mut body = writer.child();
        emit_body(&mut body, function, config);
        body.release();
    }
    writer.append_line("}");
}

fn spells_out_parameters(parameters: &[Parameter]) -> bool {
    parameters.iter().any(|p| !p.annotations.is_empty())
}

fn emit_parameter(writer: &mut CodeWriter<'_>, parameter: &Parameter, trailing_comma: bool) {
    emit_annotations(writer, &parameter.annotations);

    let mut line = String::new();
    if parameter.is_params {
        line.push_str("params ");
    }
    line.push_str(&parameter.ty.fully_qualified());
    if parameter.ty.is_array() {
        line.push_str("[]");
    }
    line.push(' ');
    line.push_str(&parameter.name);
    if let Some(default) = &parameter.default {
        line.push_str(" = ");
        line.push_str(&default.to_string());
    }
    if trailing_comma {
        line.push(',');
    }
    writer.append_line(&line);
}

fn emit_body(writer: &mut CodeWriter<'_>, function: &FunctionSymbol, config: &GeneratorConfig) {
    let arguments: Vec<&str> = function.parameters.iter().map(|p| p.name.as_str()).collect();
    let forward = format!("await {}({});", function.name, arguments.join(", "));
    let result = well_known::simple_name(WellKnownTypeId::Result);

    if config.propagate_failures {
        writer.append_line("try");
        writer.append_line("{");
        {
            let mut attempt = writer.child();
            attempt.append_line(&forward);
            attempt.release();
        }
        writer.append_line("}");
        writer.append_line(&format!(
            "catch ({} ex)",
            well_known::simple_name(WellKnownTypeId::Exception)
        ));
        writer.append_line("{");
        {
            let mut failure = writer.child();
            failure.append_line(&format!(
                "return {}.FromError(new {}(ex));",
                result,
                well_known::simple_name(WellKnownTypeId::ExceptionError)
            ));
            failure.release();
        }
        writer.append_line("}");
        writer.append_line("");
    } else {
        writer.append_line(&forward);
    }

    writer.append_line(&format!("return {}.FromSuccess();", result));
}
