mod guard_tests;
