use crate::problem::OptimizationSpec;

/// Render a problem into a JuMP script.
///
/// Pure and deterministic: the same spec always yields the same bytes.
/// Variables are declared and printed in input order.
pub fn render_script(spec: &OptimizationSpec) -> String {
    let declarations: String = spec
        .variables
        .iter()
        .map(|v| format!("@variable(m, {})\n", v.bounds))
        .collect();

    let constraints: String = spec
        .constraints
        .iter()
        .map(|c| format!("@constraint(m, {}, {})\n", c.name, c.constraint))
        .collect();

    let results: String = spec
        .variables
        .iter()
        .map(|v| format!("println(\"{name} = \", JuMP.value({name}))\n", name = v.name))
        .collect();

    format!(
        "using JuMP, {solver}\n\nm = Model(with_optimizer({optimizer}))\n\n\n{declarations}\n@objective(m, {sense}, {function})\n\n{constraints}\nJuMP.optimize!(m)\n\n{results}",
        solver = spec.solver,
        optimizer = spec.optimizer,
        declarations = declarations,
        sense = spec.sense,
        function = spec.function,
        constraints = constraints,
        results = results,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Constraint, Variable};

    fn spec(variables: &[(&str, &str)], constraints: &[(&str, &str)]) -> OptimizationSpec {
        OptimizationSpec {
            solver: "GLPK".to_string(),
            optimizer: "GLPK.Optimizer".to_string(),
            sense: "Max".to_string(),
            function: "5x + 3y".to_string(),
            variables: variables
                .iter()
                .map(|(name, bounds)| Variable {
                    name: name.to_string(),
                    bounds: bounds.to_string(),
                })
                .collect(),
            constraints: constraints
                .iter()
                .map(|(name, constraint)| Constraint {
                    name: name.to_string(),
                    constraint: constraint.to_string(),
                })
                .collect(),
        }
    }

    /// Index of each line starting with `prefix`, in order.
    fn positions(script: &str, prefix: &str) -> Vec<usize> {
        script
            .lines()
            .enumerate()
            .filter(|(_, line)| line.starts_with(prefix))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn renders_exact_script() {
        let script = render_script(&spec(
            &[("x", "0 <= x <= 2"), ("y", "y >= 0")],
            &[("c1", "x + y <= 4")],
        ));

        let expected = "using JuMP, GLPK\n\
\n\
m = Model(with_optimizer(GLPK.Optimizer))\n\
\n\
\n\
@variable(m, 0 <= x <= 2)\n\
@variable(m, y >= 0)\n\
\n\
@objective(m, Max, 5x + 3y)\n\
\n\
@constraint(m, c1, x + y <= 4)\n\
\n\
JuMP.optimize!(m)\n\
\n\
println(\"x = \", JuMP.value(x))\n\
println(\"y = \", JuMP.value(y))\n";

        assert_eq!(script, expected);
    }

    #[test]
    fn statements_follow_input_order() {
        let script = render_script(&spec(
            &[("a", "a >= 0"), ("b", "b >= 0"), ("c", "c >= 0")],
            &[("c2", "a <= b"), ("c1", "b <= c")],
        ));

        let vars = positions(&script, "@variable");
        let objective = positions(&script, "@objective");
        let cons = positions(&script, "@constraint");
        let solve = positions(&script, "JuMP.optimize!");
        let prints = positions(&script, "println");

        assert_eq!(vars.len(), 3);
        assert_eq!(objective.len(), 1);
        assert_eq!(cons.len(), 2);
        assert_eq!(solve.len(), 1);
        assert_eq!(prints.len(), 3);

        assert!(vars.last() < objective.first());
        assert!(objective.last() < cons.first());
        assert!(cons.last() < solve.first());
        assert!(solve.last() < prints.first());

        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[vars[0]], "@variable(m, a >= 0)");
        assert_eq!(lines[vars[2]], "@variable(m, c >= 0)");
        assert_eq!(lines[cons[0]], "@constraint(m, c2, a <= b)");
        assert_eq!(lines[prints[0]], "println(\"a = \", JuMP.value(a))");
        assert_eq!(lines[prints[2]], "println(\"c = \", JuMP.value(c))");
    }

    #[test]
    fn rendering_is_deterministic() {
        let problem = spec(&[("x", "x >= 0")], &[("c1", "x <= 1")]);
        assert_eq!(render_script(&problem), render_script(&problem));
    }

    #[test]
    fn empty_sequences_keep_fixed_statements() {
        let script = render_script(&spec(&[], &[]));

        assert!(script.starts_with("using JuMP, GLPK\n"));
        assert!(script.contains("m = Model(with_optimizer(GLPK.Optimizer))"));
        assert!(script.contains("@objective(m, Max, 5x + 3y)"));
        assert!(script.contains("JuMP.optimize!(m)"));
        assert!(!script.contains("@variable"));
        assert!(!script.contains("@constraint"));
        assert!(!script.contains("println"));
    }

    #[test]
    fn fragments_are_spliced_verbatim() {
        let mut problem = spec(&[], &[]);
        problem.function = "sum(x[i] for i in 1:3)".to_string();
        let script = render_script(&problem);
        assert!(script.contains("@objective(m, Max, sum(x[i] for i in 1:3))"));
    }
}
