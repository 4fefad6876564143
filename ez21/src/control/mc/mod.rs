//! Monte Carlo control.
import_all!(glie_mc);
