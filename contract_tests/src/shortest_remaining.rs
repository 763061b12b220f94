//! Shortest-remaining-time decision contract.
