/*
Macro expander.

A CPL source file is a sequence of top-level terms: zero or more macro
definitions followed by exactly one subject term. Definitions are applied to
the subject in reverse declaration order (so a definition may only reference
macros declared earlier than itself — applying late-declared macros first
keeps an earlier macro's body, which might mention it, intact until its own
turn comes up), and then the fixed set of standard macros is applied.

Instance recognition, for any macro M: a bare name `#M` is a nullary
reference; a tuple whose first sub-term is the name `M` is a reference with
arguments. Parameter substitution walks every leaf of the macro body: a leaf
equal to the parameter name is replaced outright, and a compound leaf
(`a_b_c`, split on `_`) has any segment equal to the parameter name replaced
and rejoined. Substituting a tuple into a compound-name segment is an error.
*/

use crate::error::Macro as MacroError;
use crate::term::Term;

#[derive(Debug, Clone)]
pub struct MacroDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Term,
}

/// Splits a source's top-level terms into its macro definitions (in
/// declaration order) and its single subject term.
pub fn split_definitions(mut top_level: Vec<Term>) -> Result<(Vec<MacroDef>, Term), MacroError> {
    if top_level.is_empty() {
        return Err(MacroError::MalformedDefinition("source has no subject term".to_string()));
    }
    let subject = top_level.pop().expect("checked non-empty above");

    let mut defs = Vec::with_capacity(top_level.len());
    for term in top_level {
        defs.push(parse_definition(&term)?);
    }

    let mut seen = std::collections::HashSet::new();
    for def in &defs {
        if !seen.insert(def.name.clone()) {
            return Err(MacroError::DuplicateDefinition(def.name.clone()));
        }
    }

    Ok((defs, subject))
}

fn parse_definition(term: &Term) -> Result<MacroDef, MacroError> {
    let children = match term {
        Term::Tuple(children) => children,
        _ => return Err(MacroError::MalformedDefinition("expected (macro ...)".to_string())),
    };

    if children.first().and_then(Term::as_name) != Some("macro") {
        return Err(MacroError::MalformedDefinition("expected (macro ...)".to_string()));
    }

    match children.len() {
        3 => {
            let name = children[1]
                .as_name()
                .ok_or_else(|| MacroError::MalformedDefinition("macro name must be a name".to_string()))?;
            Ok(MacroDef { name: name.to_string(), params: Vec::new(), body: children[2].clone() })
        }
        4 => {
            let name = children[1]
                .as_name()
                .ok_or_else(|| MacroError::MalformedDefinition("macro name must be a name".to_string()))?;
            let params = match &children[2] {
                Term::Tuple(ps) => ps
                    .iter()
                    .map(|p| {
                        p.as_name()
                            .map(str::to_string)
                            .ok_or_else(|| MacroError::MalformedDefinition("macro parameters must be names".to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                _ => return Err(MacroError::MalformedDefinition("expected a parameter tuple".to_string())),
            };
            Ok(MacroDef { name: name.to_string(), params, body: children[3].clone() })
        }
        _ => Err(MacroError::MalformedDefinition(format!(
            "(macro ...) takes 2 or 3 arguments, found {}",
            children.len().saturating_sub(1)
        ))),
    }
}

/// Expands user-defined macros (reverse declaration order) then the fixed
/// standard macros, returning the fully macro-free term.
pub fn expand(defs: &[MacroDef], subject: Term) -> Result<Term, MacroError> {
    let mut term = subject;
    for def in defs.iter().rev() {
        term = apply_user_macro(term, def)?;
    }
    expand_standard(term)
}

fn apply_user_macro(term: Term, def: &MacroDef) -> Result<Term, MacroError> {
    match term {
        Term::Number(n) => Ok(Term::Number(n)),
        Term::Name(s) => {
            if s == format!("#{}", def.name) {
                if def.params.is_empty() {
                    Ok(def.body.clone())
                } else {
                    Err(MacroError::ArityMismatch { name: def.name.clone(), expected: def.params.len(), found: 0 })
                }
            } else {
                Ok(Term::Name(s))
            }
        }
        Term::Tuple(children) => {
            let expanded: Vec<Term> =
                children.into_iter().map(|c| apply_user_macro(c, def)).collect::<Result<_, _>>()?;

            if expanded.first().and_then(Term::as_name) == Some(def.name.as_str()) {
                let args = &expanded[1..];
                if args.len() != def.params.len() {
                    return Err(MacroError::ArityMismatch {
                        name: def.name.clone(),
                        expected: def.params.len(),
                        found: args.len(),
                    });
                }
                let mut body = def.body.clone();
                for (param, arg) in def.params.iter().zip(args.iter()) {
                    body = substitute(body, param, arg)?;
                }
                Ok(body)
            } else {
                Ok(Term::Tuple(expanded))
            }
        }
    }
}

/// Substitutes every leaf occurrence of `param` in `term` with `replacement`,
/// including compound (`_`-joined) leaf segments.
fn substitute(term: Term, param: &str, replacement: &Term) -> Result<Term, MacroError> {
    match term {
        Term::Number(n) => Ok(Term::Number(n)),
        Term::Name(s) => {
            if s == param {
                return Ok(replacement.clone());
            }
            if !s.contains('_') {
                return Ok(Term::Name(s));
            }
            let mut segments: Vec<String> = s.split('_').map(str::to_string).collect();
            let mut changed = false;
            for segment in segments.iter_mut() {
                if segment == param {
                    *segment = replacement_text(replacement)?;
                    changed = true;
                }
            }
            if changed {
                Ok(Term::Name(segments.join("_")))
            } else {
                Ok(Term::Name(s))
            }
        }
        Term::Tuple(children) => {
            let children =
                children.into_iter().map(|c| substitute(c, param, replacement)).collect::<Result<_, _>>()?;
            Ok(Term::Tuple(children))
        }
    }
}

fn replacement_text(term: &Term) -> Result<String, MacroError> {
    match term {
        Term::Name(s) => Ok(s.clone()),
        Term::Number(n) => Ok(n.to_string()),
        Term::Tuple(_) => Err(MacroError::TupleIntoCompoundName(describe(term))),
    }
}

fn describe(term: &Term) -> String {
    match term {
        Term::Name(s) => s.clone(),
        Term::Number(n) => n.to_string(),
        Term::Tuple(_) => "(...)".to_string(),
    }
}

fn term_as_i64(term: &Term) -> Result<i64, MacroError> {
    match term {
        Term::Number(n) => Ok(*n),
        other => Err(MacroError::MalformedDefinition(format!("expected a number, found {}", describe(other)))),
    }
}

/// Expands the six fixed standard macros. Indexed-expansion bodies are
/// substituted before being recursively expanded, so arithmetic and
/// conditionals nested inside an indexed body see concrete index values
/// rather than the free loop variable.
fn expand_standard(term: Term) -> Result<Term, MacroError> {
    let children = match term {
        Term::Tuple(children) => children,
        other => return Ok(other),
    };

    let head = children.first().and_then(Term::as_name).map(str::to_string);

    match head.as_deref() {
        Some("if") if children.len() == 3 => {
            let cond = expand_standard(children[1].clone())?;
            let n = term_as_i64(&cond)?;
            let body = expand_standard(children[2].clone())?;
            if n != 0 {
                Ok(body)
            } else {
                Ok(Term::Tuple(vec![Term::Name("empty".to_string())]))
            }
        }
        Some("calc") => {
            let evaluated: Vec<Term> =
                children[1..].iter().cloned().map(expand_standard).collect::<Result<_, _>>()?;
            Ok(Term::Number(eval_calc(&evaluated)?))
        }
        Some("/\\*") if children.len() == 5 => expand_linear_index(&children, "/\\"),
        Some("\\/*") if children.len() == 5 => expand_linear_index(&children, "\\/"),
        Some("/\\**") if children.len() == 6 => expand_pairwise_index(&children, "/\\"),
        Some("\\/**") if children.len() == 6 => expand_pairwise_index(&children, "\\/"),
        _ => {
            let expanded: Vec<Term> = children.into_iter().map(expand_standard).collect::<Result<_, _>>()?;
            Ok(Term::Tuple(expanded))
        }
    }
}

fn expand_linear_index(children: &[Term], joiner: &str) -> Result<Term, MacroError> {
    let index_name = children[1]
        .as_name()
        .ok_or_else(|| MacroError::MalformedDefinition("indexed expansion variable must be a name".to_string()))?;
    let lo = term_as_i64(&expand_standard(children[2].clone())?)?;
    let hi = term_as_i64(&expand_standard(children[3].clone())?)?;

    let mut copies = Vec::new();
    for i in lo..=hi {
        let substituted = substitute(children[4].clone(), index_name, &Term::Number(i))?;
        copies.push(expand_standard(substituted)?);
    }
    let mut tuple = vec![Term::Name(joiner.to_string())];
    tuple.extend(copies);
    Ok(Term::Tuple(tuple))
}

fn expand_pairwise_index(children: &[Term], joiner: &str) -> Result<Term, MacroError> {
    let lo = term_as_i64(&expand_standard(children[1].clone())?)?;
    let i_name = children[2]
        .as_name()
        .ok_or_else(|| MacroError::MalformedDefinition("indexed expansion variable must be a name".to_string()))?;
    let j_name = children[3]
        .as_name()
        .ok_or_else(|| MacroError::MalformedDefinition("indexed expansion variable must be a name".to_string()))?;
    let hi = term_as_i64(&expand_standard(children[4].clone())?)?;
    let body = &children[5];

    let mut copies = Vec::new();
    for a in lo..hi {
        for b in (a + 1)..=hi {
            let substituted = substitute(body.clone(), i_name, &Term::Number(a))?;
            let substituted = substitute(substituted, j_name, &Term::Number(b))?;
            copies.push(expand_standard(substituted)?);
        }
    }
    let mut tuple = vec![Term::Name(joiner.to_string())];
    tuple.extend(copies);
    Ok(Term::Tuple(tuple))
}

fn eval_calc(tokens: &[Term]) -> Result<i64, MacroError> {
    let mut stack: Vec<i64> = Vec::new();
    for token in tokens {
        match token {
            Term::Number(n) => stack.push(*n),
            Term::Name(op) => {
                let b = stack.pop().ok_or_else(|| MacroError::MalformedCalc(format!("missing operand for {op}")))?;
                let a = stack.pop().ok_or_else(|| MacroError::MalformedCalc(format!("missing operand for {op}")))?;
                let result = match op.as_str() {
                    "+" => a + b,
                    "-" => a - b,
                    "*" => a * b,
                    "=" => (a == b) as i64,
                    "and" => ((a != 0) && (b != 0)) as i64,
                    "or" => ((a != 0) || (b != 0)) as i64,
                    other => return Err(MacroError::MalformedCalc(format!("unknown calc operator: {other}"))),
                };
                stack.push(result);
            }
            Term::Tuple(_) => return Err(MacroError::MalformedCalc("calc operands must be numbers".to_string())),
        }
    }
    if stack.len() != 1 {
        return Err(MacroError::MalformedCalc(format!("expected exactly one result, found {}", stack.len())));
    }
    Ok(stack[0])
}
