//! Temporal-difference control.
import_all!(sarsa_lambda);
import_all!(linear_sarsa_lambda);
